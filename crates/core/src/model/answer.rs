/// User input for one question.
///
/// Single-selection widgets hand over one string, multi-selection widgets a
/// list; the session stores both shapes uniformly as a list of selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerInput {
    Single(String),
    Many(Vec<String>),
}

impl AnswerInput {
    /// Normalizes the input: a single answer becomes a one-element list.
    #[must_use]
    pub fn into_selections(self) -> Vec<String> {
        match self {
            AnswerInput::Single(s) => vec![s],
            AnswerInput::Many(list) => list,
        }
    }
}

impl From<&str> for AnswerInput {
    fn from(s: &str) -> Self {
        AnswerInput::Single(s.to_string())
    }
}

impl From<String> for AnswerInput {
    fn from(s: String) -> Self {
        AnswerInput::Single(s)
    }
}

impl From<Vec<String>> for AnswerInput {
    fn from(list: Vec<String>) -> Self {
        AnswerInput::Many(list)
    }
}

impl From<Vec<&str>> for AnswerInput {
    fn from(list: Vec<&str>) -> Self {
        AnswerInput::Many(list.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_answer_wraps_into_list() {
        let input: AnswerInput = "A".into();
        assert_eq!(input.into_selections(), vec!["A".to_string()]);
    }

    #[test]
    fn test_many_answers_pass_through() {
        let input: AnswerInput = vec!["D", "C"].into();
        assert_eq!(
            input.into_selections(),
            vec!["D".to_string(), "C".to_string()]
        );
    }

    #[test]
    fn test_empty_list_stays_empty() {
        let input = AnswerInput::Many(Vec::new());
        assert!(input.into_selections().is_empty());
    }
}
