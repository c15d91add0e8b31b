use async_graphql::{Enum, SimpleObject};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// Input kind of a field. Only `Question` carries an answer key.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Textarea,
    Email,
    Number,
    Date,
    Select {
        #[serde(default)]
        choices: Vec<String>,
    },
    Checkbox {
        #[serde(default)]
        choices: Vec<String>,
    },
    File,
    Question(QuestionField),
}

impl FieldKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Textarea => "textarea",
            FieldKind::Email => "email",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Select { .. } => "select",
            FieldKind::Checkbox { .. } => "checkbox",
            FieldKind::File => "file",
            FieldKind::Question(_) => "question",
        }
    }
}

impl FormField {
    pub fn new(label: &str, kind: FieldKind) -> Self {
        FormField {
            id: Uuid::new_v4().to_string(),
            label: label.to_string(),
            required: false,
            kind,
        }
    }

    pub fn as_question(&self) -> Option<&QuestionField> {
        match &self.kind {
            FieldKind::Question(question) => Some(question),
            _ => None,
        }
    }

    pub fn as_question_mut(&mut self) -> Option<&mut QuestionField> {
        match &mut self.kind {
            FieldKind::Question(question) => Some(question),
            _ => None,
        }
    }

    /// Prompt shown for a question, falling back to the field label.
    pub fn question_text(&self) -> &str {
        match self.as_question() {
            Some(question) if !question.question_text.is_empty() => &question.question_text,
            _ => &self.label,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum QuestionMode {
    #[default]
    Single,
    Multiple,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuestionField {
    #[serde(default)]
    pub question_text: String,
    #[serde(default)]
    pub mode: QuestionMode,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
}

impl QuestionField {
    pub fn new(question_text: &str, mode: QuestionMode) -> Self {
        QuestionField {
            question_text: question_text.to_string(),
            mode,
            options: Vec::new(),
        }
    }

    pub fn option(&self, option_id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    fn position(&self, option_id: &str) -> AppResult<usize> {
        self.options
            .iter()
            .position(|o| o.id == option_id)
            .ok_or_else(|| AppError::NotFound(format!("Option '{}' not found", option_id)))
    }

    /// Appends a new, not-yet-correct option. Blank text is rejected.
    pub fn add_option(&mut self, text: &str) -> AppResult<&QuestionOption> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::ValidationError(
                "Option text must not be empty".to_string(),
            ));
        }

        self.options.push(QuestionOption {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            is_correct: false,
        });

        let last = self.options.len() - 1;
        Ok(&self.options[last])
    }

    pub fn edit_option_text(&mut self, option_id: &str, text: &str) -> AppResult<()> {
        let idx = self.position(option_id)?;
        self.options[idx].text = text.to_string();
        Ok(())
    }

    pub fn delete_option(&mut self, option_id: &str) -> AppResult<QuestionOption> {
        let idx = self.position(option_id)?;
        Ok(self.options.remove(idx))
    }

    /// Single mode marks the target as the only correct option.
    /// Multiple mode flips the target alone.
    pub fn toggle_correct(&mut self, option_id: &str) -> AppResult<()> {
        let idx = self.position(option_id)?;

        match self.mode {
            QuestionMode::Single => {
                for (i, option) in self.options.iter_mut().enumerate() {
                    option.is_correct = i == idx;
                }
            }
            QuestionMode::Multiple => {
                self.options[idx].is_correct = !self.options[idx].is_correct;
            }
        }

        Ok(())
    }

    /// Switching to single mode keeps only the first correct option.
    pub fn set_mode(&mut self, mode: QuestionMode) {
        self.mode = mode;

        if mode == QuestionMode::Single {
            let mut seen_correct = false;
            for option in self.options.iter_mut().filter(|o| o.is_correct) {
                if seen_correct {
                    option.is_correct = false;
                }
                seen_correct = true;
            }
        }
    }

    pub fn correct_option_ids(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| o.is_correct)
            .map(|o| o.id.clone())
            .collect()
    }

    /// Respondent-side selection: single mode replaces, multiple mode toggles.
    pub fn select_answer(&self, selected: &mut Vec<String>, option_id: &str) -> AppResult<()> {
        self.position(option_id)?;

        match self.mode {
            QuestionMode::Single => {
                selected.clear();
                selected.push(option_id.to_string());
            }
            QuestionMode::Multiple => {
                if let Some(pos) = selected.iter().position(|id| id == option_id) {
                    selected.remove(pos);
                } else {
                    selected.push(option_id.to_string());
                }
            }
        }

        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        let correct = self.options.iter().filter(|o| o.is_correct).count();
        if self.mode == QuestionMode::Single && correct > 1 {
            return Err(AppError::ValidationError(format!(
                "Single-choice question has {} correct options; at most one is allowed",
                correct
            )));
        }

        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].iter().any(|o| o.id == option.id) {
                return Err(AppError::ValidationError(format!(
                    "Duplicate option id '{}'",
                    option.id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_with(mode: QuestionMode, texts: &[&str]) -> QuestionField {
        let mut question = QuestionField::new("Pick one", mode);
        for text in texts {
            question.add_option(text).unwrap();
        }
        question
    }

    fn correct_texts(question: &QuestionField) -> Vec<&str> {
        question
            .options
            .iter()
            .filter(|o| o.is_correct)
            .map(|o| o.text.as_str())
            .collect()
    }

    #[test]
    fn add_option_trims_and_starts_incorrect() {
        let question = question_with(QuestionMode::Single, &["  Paris  "]);

        assert_eq!(question.options.len(), 1);
        assert_eq!(question.options[0].text, "Paris");
        assert!(!question.options[0].is_correct);
    }

    #[test]
    fn add_option_rejects_blank_text() {
        let mut question = QuestionField::new("Q", QuestionMode::Single);

        assert!(matches!(
            question.add_option("   "),
            Err(AppError::ValidationError(_))
        ));
        assert!(question.add_option("").is_err());
        assert!(question.options.is_empty());
    }

    #[test]
    fn single_mode_marking_b_after_a_leaves_only_b() {
        let mut question = question_with(QuestionMode::Single, &["A", "B", "C"]);
        let a = question.options[0].id.clone();
        let b = question.options[1].id.clone();

        question.toggle_correct(&a).unwrap();
        question.toggle_correct(&b).unwrap();

        assert_eq!(correct_texts(&question), vec!["B"]);
    }

    #[test]
    fn single_mode_toggle_on_correct_option_keeps_it_correct() {
        let mut question = question_with(QuestionMode::Single, &["A", "B"]);
        let a = question.options[0].id.clone();

        question.toggle_correct(&a).unwrap();
        question.toggle_correct(&a).unwrap();

        assert_eq!(correct_texts(&question), vec!["A"]);
    }

    #[test]
    fn multiple_mode_flips_only_target() {
        let mut question = question_with(QuestionMode::Multiple, &["A", "B", "C"]);
        let a = question.options[0].id.clone();
        let c = question.options[2].id.clone();

        question.toggle_correct(&a).unwrap();
        question.toggle_correct(&c).unwrap();
        assert_eq!(correct_texts(&question), vec!["A", "C"]);

        question.toggle_correct(&a).unwrap();
        assert_eq!(correct_texts(&question), vec!["C"]);
    }

    #[test]
    fn edit_and_delete_unknown_option_is_not_found() {
        let mut question = question_with(QuestionMode::Single, &["A"]);

        assert!(matches!(
            question.edit_option_text("missing", "x"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            question.delete_option("missing"),
            Err(AppError::NotFound(_))
        ));
        assert!(question.toggle_correct("missing").is_err());
    }

    #[test]
    fn edit_and_delete_option() {
        let mut question = question_with(QuestionMode::Multiple, &["A", "B"]);
        let a = question.options[0].id.clone();

        question.edit_option_text(&a, "Alpha").unwrap();
        assert_eq!(question.options[0].text, "Alpha");

        let removed = question.delete_option(&a).unwrap();
        assert_eq!(removed.text, "Alpha");
        assert_eq!(question.options.len(), 1);
        assert_eq!(question.options[0].text, "B");
    }

    #[test]
    fn switching_to_single_keeps_first_correct() {
        let mut question = question_with(QuestionMode::Multiple, &["A", "B", "C"]);
        let b = question.options[1].id.clone();
        let c = question.options[2].id.clone();
        question.toggle_correct(&b).unwrap();
        question.toggle_correct(&c).unwrap();

        question.set_mode(QuestionMode::Single);

        assert_eq!(question.mode, QuestionMode::Single);
        assert_eq!(correct_texts(&question), vec!["B"]);
        assert!(question.validate().is_ok());
    }

    #[test]
    fn validate_rejects_inconsistent_single_choice() {
        let mut question = question_with(QuestionMode::Single, &["A", "B"]);
        for option in question.options.iter_mut() {
            option.is_correct = true;
        }

        assert!(matches!(
            question.validate(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn zero_options_and_zero_correct_answers_are_allowed() {
        let empty = QuestionField::new("Q", QuestionMode::Multiple);
        assert!(empty.validate().is_ok());

        let unanswered = question_with(QuestionMode::Single, &["A"]);
        assert!(unanswered.validate().is_ok());
        assert!(unanswered.correct_option_ids().is_empty());
    }

    #[test]
    fn select_answer_follows_mode() {
        let single = question_with(QuestionMode::Single, &["A", "B"]);
        let mut selected = Vec::new();
        single.select_answer(&mut selected, &single.options[0].id).unwrap();
        single.select_answer(&mut selected, &single.options[1].id).unwrap();
        assert_eq!(selected, vec![single.options[1].id.clone()]);

        let multi = question_with(QuestionMode::Multiple, &["A", "B"]);
        let mut selected = Vec::new();
        multi.select_answer(&mut selected, &multi.options[0].id).unwrap();
        multi.select_answer(&mut selected, &multi.options[1].id).unwrap();
        multi.select_answer(&mut selected, &multi.options[0].id).unwrap();
        assert_eq!(selected, vec![multi.options[1].id.clone()]);
    }

    #[test]
    fn field_kind_serializes_with_type_tag() {
        let field = FormField {
            id: "f-1".to_string(),
            label: "Capital".to_string(),
            required: true,
            kind: FieldKind::Question(question_with(QuestionMode::Multiple, &["A"])),
        };

        let json = serde_json::to_value(&field).expect("field should serialize");
        assert_eq!(json["type"], "question");
        assert_eq!(json["mode"], "multiple");
        assert_eq!(json["options"][0]["isCorrect"], false);

        let parsed: FormField = serde_json::from_value(json).expect("field should deserialize");
        assert_eq!(parsed, field);
    }

    #[test]
    fn question_text_falls_back_to_label() {
        let field = FormField::new("Label", FieldKind::Question(QuestionField::default()));
        assert_eq!(field.question_text(), "Label");

        let plain = FormField::new("Email", FieldKind::Email);
        assert!(plain.as_question().is_none());
        assert_eq!(plain.kind.type_name(), "email");
    }
}
