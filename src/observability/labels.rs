use metrics::{IntoLabels, Label, SharedString};

/// Labels attached to every counter a validator reports. They are merged with the
/// per-counter `type`/`outcome` labels when the validator is built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

impl Labels {
    pub fn empty() -> Self {
        Labels(vec![])
    }

    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    /// Clone the actual [Labels] with additional key-value labels
    pub fn clone_with_labels(&self, additional_labels: &Labels) -> Labels {
        let mut labels = self.0.clone();
        labels.extend(additional_labels.0.iter().cloned());
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}

#[cfg(test)]
mod test {
    use crate::observability::labels::Labels;
    use metrics::{IntoLabels, Label};

    #[test]
    fn test_clone_labels() {
        let labels = Labels::new(&[("service", "payments")]);

        let with_type = labels.clone_with_labels(&Labels::new(&[("type", "iban")]));
        let label_list = with_type.into_labels();
        assert!(label_list.contains(&Label::new("service", "payments")));
        assert!(label_list.contains(&Label::new("type", "iban")));

        let with_outcome = labels.clone_with_labels(&Labels::new(&[
            ("type", "bic"),
            ("outcome", "valid"),
        ]));
        let label_list = with_outcome.into_labels();
        assert!(label_list.contains(&Label::new("service", "payments")));
        assert!(!label_list.contains(&Label::new("type", "iban")));
        assert!(label_list.contains(&Label::new("type", "bic")));
        assert!(label_list.contains(&Label::new("outcome", "valid")));
    }

    #[test]
    fn empty_labels_stay_empty() {
        let labels = Labels::empty().clone_with_labels(&Labels::empty());
        assert_eq!(labels, Labels::default());
        assert!(labels.into_labels().is_empty());
    }
}
