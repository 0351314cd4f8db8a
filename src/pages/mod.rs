mod auth;
mod chat;
mod dashboard;
mod flashcards;
mod history;
mod layout;
mod mindmap;
mod not_found;
mod notebooks;
mod profile;
mod quiz;
mod smart_notes;
mod upload;

pub use auth::AuthPage;
pub use chat::ChatPage;
pub use dashboard::DashboardPage;
pub use flashcards::FlashcardsPage;
pub use history::HistoryPage;
pub use layout::AppShell;
pub use mindmap::MindMapPage;
pub use not_found::NotFoundPage;
pub use notebooks::NotebooksPage;
pub use profile::ProfilePage;
pub use quiz::QuizPage;
pub use smart_notes::SmartNotesPage;
pub use upload::UploadPage;
