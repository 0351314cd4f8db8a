//! Sample study content shown until generation is wired to a backend.

pub(crate) struct McqQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct_answer: &'static str,
    pub explanation: &'static str,
}

pub(crate) struct ShortAnswerQuestion {
    pub question: &'static str,
    pub sample_answer: &'static str,
}

pub(crate) struct Flashcard {
    pub front: &'static str,
    pub back: &'static str,
}

pub(crate) struct NoteSection {
    pub title: &'static str,
    pub content: &'static str,
}

pub(crate) struct Chapter {
    pub title: &'static str,
    pub pages: &'static str,
}

pub(crate) const MATERIAL_TITLE: &str = "Neural Networks";
pub(crate) const MATERIAL_SOURCE: &str = "Neural_Networks.pdf";

pub(crate) const MCQ_QUESTIONS: [McqQuestion; 3] = [
    McqQuestion {
        question: "Which of the following is NOT a type of neural network?",
        options: [
            "Convolutional Neural Network (CNN)",
            "Recurrent Neural Network (RNN)",
            "Bilateral Neural Network (BNN)",
            "Generative Adversarial Network (GAN)",
        ],
        correct_answer: "Bilateral Neural Network (BNN)",
        explanation: "Bilateral Neural Network (BNN) is a fictional type. The common types of neural networks include Convolutional Neural Networks (CNNs), Recurrent Neural Networks (RNNs), Generative Adversarial Networks (GANs), and Transformers.",
    },
    McqQuestion {
        question: "What is the purpose of an activation function in a neural network?",
        options: [
            "To initialize the weights of the network",
            "To introduce non-linearity to the model",
            "To normalize the input data",
            "To reduce the learning rate during training",
        ],
        correct_answer: "To introduce non-linearity to the model",
        explanation: "Activation functions introduce non-linearity into the neural network, allowing it to learn and perform complex tasks. Without activation functions, the neural network would behave like a linear regression model, regardless of its depth.",
    },
    McqQuestion {
        question: "Which algorithm is commonly used to train neural networks?",
        options: [
            "K-means clustering",
            "Decision trees",
            "Backpropagation",
            "Principal Component Analysis",
        ],
        correct_answer: "Backpropagation",
        explanation: "Backpropagation is the primary algorithm used to train neural networks. It works by calculating the gradient of the loss function with respect to each weight, allowing the network to adjust weights to minimize error.",
    },
];

pub(crate) const SHORT_ANSWER_QUESTIONS: [ShortAnswerQuestion; 2] = [
    ShortAnswerQuestion {
        question: "Explain the difference between supervised and unsupervised learning.",
        sample_answer: "Supervised learning involves training a model using labeled data, where the desired output is known. The model learns to map inputs to outputs based on example input-output pairs. Unsupervised learning, in contrast, uses unlabeled data and seeks to find patterns or structures within the data without specific guidance about what to look for.",
    },
    ShortAnswerQuestion {
        question: "What is overfitting in machine learning and how can it be prevented?",
        sample_answer: "Overfitting occurs when a model learns the training data too well, including its noise and outliers, resulting in poor performance on new, unseen data. It can be prevented through techniques like regularization, early stopping, using more training data, data augmentation, and implementing dropout in neural networks.",
    },
];

pub(crate) const FLASHCARDS: [Flashcard; 5] = [
    Flashcard {
        front: "What is a neural network?",
        back: "A neural network is a computing system inspired by the biological neural networks in animal brains. It consists of artificial neurons organized in layers that can learn to perform tasks by analyzing examples.",
    },
    Flashcard {
        front: "What is backpropagation?",
        back: "Backpropagation is an algorithm used to train neural networks by calculating the gradient of the loss function with respect to each weight. It propagates the error backward through the network to adjust weights and minimize error.",
    },
    Flashcard {
        front: "What is an activation function?",
        back: "An activation function introduces non-linearity into a neural network, allowing it to learn complex patterns. Common examples include ReLU, sigmoid, and tanh functions.",
    },
    Flashcard {
        front: "What is a Convolutional Neural Network (CNN)?",
        back: "A Convolutional Neural Network is a type of neural network designed primarily for processing grid-like data, such as images. It uses convolutional layers to automatically learn spatial hierarchies of features.",
    },
    Flashcard {
        front: "What is overfitting?",
        back: "Overfitting occurs when a model learns the training data too well, including its noise and outliers, resulting in poor performance on new, unseen data.",
    },
];

pub(crate) const NOTES_SUMMARY: &str = "Neural networks are computing systems inspired by the biological neural networks in animal brains. They are the foundation of many modern AI systems and can learn to perform tasks by analyzing examples.";

pub(crate) const NOTES_KEY_POINTS: [&str; 5] = [
    "Neural networks consist of artificial neurons organized in layers",
    "Deep learning uses neural networks with many hidden layers",
    "Training involves adjusting weights through backpropagation",
    "Activation functions introduce non-linearity into the model",
    "Common applications include image recognition and natural language processing",
];

pub(crate) const NOTES_SECTIONS: [NoteSection; 4] = [
    NoteSection {
        title: "Basic Structure",
        content: "Neural networks consist of interconnected nodes or 'neurons' organized in layers. The typical structure includes an input layer, one or more hidden layers, and an output layer. Each connection between neurons has a weight that determines the influence of one neuron on another.",
    },
    NoteSection {
        title: "Learning Process",
        content: "Neural networks learn through a process called backpropagation. During training, the network makes predictions, compares them to the expected outputs, and adjusts the connection weights to minimize the error. This process is repeated many times with different examples from the training data.",
    },
    NoteSection {
        title: "Activation Functions",
        content: "Activation functions introduce non-linearity into the model, allowing neural networks to learn complex patterns. Common activation functions include ReLU (Rectified Linear Unit), sigmoid, and tanh. The choice of activation function impacts the network's ability to learn and its performance.",
    },
    NoteSection {
        title: "Types of Neural Networks",
        content: "There are various types of neural networks designed for different tasks. Convolutional Neural Networks (CNNs) excel at image processing, while Recurrent Neural Networks (RNNs) and Long Short-Term Memory networks (LSTMs) are suited for sequential data like text or time series.",
    },
];

pub(crate) const CHAT_GREETING: &str = "Hello! I'm your AI study assistant. You can ask me questions about the document you've uploaded.";

pub(crate) const CHAT_REPLY: &str = "Based on the document, neural networks are computing systems inspired by biological neural networks found in animal brains. They consist of artificial neurons organized in layers, typically including an input layer, hidden layers, and an output layer. Each connection between neurons has a weight that determines the influence of one neuron on another.";

pub(crate) const DOCUMENT_TITLE: &str = "Introduction to Neural Networks";

pub(crate) const DOCUMENT_KEY_POINTS: [&str; 5] = [
    "Neural networks are computing systems inspired by biological neural networks",
    "They consist of artificial neurons organized in layers",
    "Deep learning uses neural networks with many hidden layers",
    "Training involves adjusting weights through backpropagation",
    "Applications include image recognition and natural language processing",
];

pub(crate) const DOCUMENT_CHAPTERS: [Chapter; 4] = [
    Chapter { title: "Chapter 1: Basic Structure", pages: "1-15" },
    Chapter { title: "Chapter 2: Learning Process", pages: "16-32" },
    Chapter { title: "Chapter 3: Activation Functions", pages: "33-47" },
    Chapter { title: "Chapter 4: Types of Neural Networks", pages: "48-65" },
];
