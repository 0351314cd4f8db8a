use strum::{Display, EnumIter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MindMapNode {
    pub id: &'static str,
    pub label: &'static str,
    /// `None` renders as expanded.
    pub expanded: Option<bool>,
    pub children: Vec<MindMapNode>,
}

impl MindMapNode {
    fn leaf(id: &'static str, label: &'static str) -> Self {
        Self::branch(id, label, None, Vec::new())
    }

    fn branch(
        id: &'static str,
        label: &'static str,
        expanded: Option<bool>,
        children: Vec<MindMapNode>,
    ) -> Self {
        Self {
            id,
            label,
            expanded,
            children,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded != Some(false)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns a copy of the tree with `id`'s visible expansion flipped.
    pub fn toggle(&self, id: &str) -> MindMapNode {
        if self.id == id {
            return Self {
                expanded: Some(!self.is_expanded()),
                ..self.clone()
            };
        }
        Self {
            children: self.children.iter().map(|c| c.toggle(id)).collect(),
            ..self.clone()
        }
    }

    #[cfg(test)]
    pub fn find(&self, id: &str) -> Option<&MindMapNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Nodes currently on screen with their depth, in render order.
    pub fn visible(&self) -> Vec<(usize, &MindMapNode)> {
        let mut out = Vec::new();
        self.collect_visible(0, &mut out);
        out
    }

    fn collect_visible<'a>(&'a self, depth: usize, out: &mut Vec<(usize, &'a MindMapNode)>) {
        out.push((depth, self));
        if self.is_expanded() {
            for c in &self.children {
                c.collect_visible(depth + 1, out);
            }
        }
    }
}

pub(crate) fn sample_tree() -> MindMapNode {
    use MindMapNode as N;
    N::branch(
        "root",
        "Neural Networks",
        Some(true),
        vec![
            N::branch(
                "structure",
                "Structure",
                Some(true),
                vec![
                    N::leaf("input-layer", "Input Layer"),
                    N::leaf("hidden-layers", "Hidden Layers"),
                    N::leaf("output-layer", "Output Layer"),
                ],
            ),
            N::branch(
                "types",
                "Types",
                Some(true),
                vec![
                    N::branch(
                        "cnn",
                        "Convolutional Neural Networks (CNN)",
                        None,
                        vec![N::branch(
                            "cnn-applications",
                            "Applications",
                            None,
                            vec![
                                N::leaf("image-recognition", "Image Recognition"),
                                N::leaf("face-detection", "Face Detection"),
                            ],
                        )],
                    ),
                    N::branch(
                        "rnn",
                        "Recurrent Neural Networks (RNN)",
                        None,
                        vec![N::branch(
                            "rnn-applications",
                            "Applications",
                            None,
                            vec![
                                N::leaf("nlp", "Natural Language Processing"),
                                N::leaf("time-series", "Time Series Analysis"),
                            ],
                        )],
                    ),
                ],
            ),
            N::branch(
                "training",
                "Training",
                Some(true),
                vec![
                    N::leaf("backpropagation", "Backpropagation"),
                    N::leaf("gradient-descent", "Gradient Descent"),
                    N::branch(
                        "optimization",
                        "Optimization Algorithms",
                        Some(false),
                        vec![
                            N::leaf("adam", "Adam"),
                            N::leaf("rmsprop", "RMSprop"),
                            N::leaf("sgd", "Stochastic Gradient Descent"),
                        ],
                    ),
                ],
            ),
        ],
    )
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter)]
pub(crate) enum ViewMode {
    #[default]
    #[strum(serialize = "Mind Map")]
    MindMap,
    #[strum(serialize = "Flowchart")]
    Flowchart,
}

/// Zoom kept in whole percent so repeated steps never drift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Zoom(u16);

impl Zoom {
    const MIN: u16 = 50;
    const MAX: u16 = 200;
    const STEP: u16 = 10;

    pub fn percent(&self) -> u16 {
        self.0
    }

    pub fn scale(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn zoom_in(self) -> Self {
        Self((self.0 + Self::STEP).min(Self::MAX))
    }

    pub fn zoom_out(self) -> Self {
        Self(self.0.saturating_sub(Self::STEP).max(Self::MIN))
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_branch_hides_children() {
        let tree = sample_tree();
        let ids: Vec<&str> = tree.visible().iter().map(|(_, n)| n.id).collect();
        assert!(ids.contains(&"optimization"));
        assert!(!ids.contains(&"adam"));
        // Unflagged nodes render expanded.
        assert!(ids.contains(&"image-recognition"));
    }

    #[test]
    fn test_toggle_returns_new_tree() {
        let tree = sample_tree();
        let opened = tree.toggle("optimization");
        assert_eq!(tree.find("optimization").map(|n| n.is_expanded()), Some(false));
        assert_eq!(opened.find("optimization").map(|n| n.is_expanded()), Some(true));
        assert!(opened.visible().iter().any(|(d, n)| n.id == "sgd" && *d == 3));
    }

    #[test]
    fn test_toggle_unflagged_node_collapses_it() {
        let tree = sample_tree().toggle("cnn");
        assert_eq!(tree.find("cnn").map(|n| n.expanded), Some(Some(false)));
        assert!(tree.visible().iter().all(|(_, n)| n.id != "cnn-applications"));
        assert_eq!(tree.toggle("cnn").find("cnn").map(|n| n.is_expanded()), Some(true));
    }

    #[test]
    fn test_toggle_unknown_id_is_identity() {
        let tree = sample_tree();
        assert_eq!(tree.toggle("missing"), tree);
    }

    #[test]
    fn test_zoom_clamps() {
        let mut z = Zoom::default();
        for _ in 0..20 {
            z = z.zoom_in();
        }
        assert_eq!(z.percent(), 200);
        for _ in 0..20 {
            z = z.zoom_out();
        }
        assert_eq!(z.percent(), 50);
        assert_eq!(z.zoom_in().scale(), 0.6);
    }
}
