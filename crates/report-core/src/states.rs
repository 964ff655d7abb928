/// The five fixed operator activity categories.
///
/// Variants are ordered the way the state columns appear in the operator
/// report. The labels are the domain's display strings and must be preserved
/// byte-for-byte for output compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorState {
    Pause,
    Ready,
    Talk,
    Processing,
    Recall,
}

impl OperatorState {
    /// All states, in report column order.
    pub const ALL: [OperatorState; 5] = [
        OperatorState::Pause,
        OperatorState::Ready,
        OperatorState::Talk,
        OperatorState::Processing,
        OperatorState::Recall,
    ];

    /// The display label for this state.
    pub fn label(self) -> &'static str {
        match self {
            OperatorState::Pause => "Пауза",
            OperatorState::Ready => "Готов",
            OperatorState::Talk => "Разговор",
            OperatorState::Processing => "Обработка",
            OperatorState::Recall => "Перезвон",
        }
    }

    /// Resolve a raw state label to a known state.
    ///
    /// Returns `None` for anything outside the fixed set; the caller decides
    /// how to report the anomaly.
    pub fn from_label(label: &str) -> Option<OperatorState> {
        Self::ALL.into_iter().find(|state| state.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_column_order() {
        let labels: Vec<&str> = OperatorState::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["Пауза", "Готов", "Разговор", "Обработка", "Перезвон"]
        );
    }

    #[test]
    fn test_from_label_round_trip() {
        for state in OperatorState::ALL {
            assert_eq!(OperatorState::from_label(state.label()), Some(state));
        }
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(OperatorState::from_label("Unknown"), None);
        assert_eq!(OperatorState::from_label(""), None);
        // Labels are case-sensitive.
        assert_eq!(OperatorState::from_label("пауза"), None);
    }
}
