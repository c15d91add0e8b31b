use async_graphql::{Enum, SimpleObject};
use serde::Serialize;

use crate::models::domain::{FieldAnswer, Form, FormResponse, QuestionOption};

#[derive(Clone, Debug, PartialEq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub question_id: String,
    pub question_text: String,
    pub user_answers: Vec<String>,
    pub correct_answers: Vec<String>,
    pub is_correct: bool,
    pub options: Vec<QuestionOption>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Enum)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRating {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreRating {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreRating::Excellent
        } else if score >= 60.0 {
            ScoreRating::Good
        } else {
            ScoreRating::NeedsImprovement
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct TestReport {
    pub form_id: String,
    pub response_id: Option<String>,
    pub results: Vec<TestResult>,
    pub correct_count: i32,
    pub incorrect_count: i32,
    pub total_questions: i32,
    /// Percentage of questions answered correctly, `0..=100`.
    pub score: f64,
    pub rating: ScoreRating,
}

impl TestReport {
    pub fn rounded_score(&self) -> i64 {
        self.score.round() as i64
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct AggregateReport {
    pub form_id: String,
    pub response_count: i32,
    pub average_score: f64,
    pub reports: Vec<TestReport>,
}

/// Size check plus containment check against the answer key.
pub fn is_answer_correct(submitted: &[String], correct: &[String]) -> bool {
    submitted.len() == correct.len() && submitted.iter().all(|id| correct.contains(id))
}

/// Scores one set of field answers against the question fields of `form`.
/// Unanswered questions count as an empty answer set.
pub fn score_answers(form: &Form, answers: &[FieldAnswer]) -> TestReport {
    let results: Vec<TestResult> = form
        .question_fields()
        .map(|(field, question)| {
            let user_answers = answers
                .iter()
                .find(|a| a.field_id == field.id)
                .map(FieldAnswer::selected_option_ids)
                .unwrap_or_default();
            let correct_answers = question.correct_option_ids();
            let is_correct = is_answer_correct(&user_answers, &correct_answers);

            TestResult {
                question_id: field.id.clone(),
                question_text: field.question_text().to_string(),
                user_answers,
                correct_answers,
                is_correct,
                options: question.options.clone(),
            }
        })
        .collect();

    let total = results.len();
    let correct = results.iter().filter(|r| r.is_correct).count();
    let score = if total > 0 {
        correct as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    TestReport {
        form_id: form.id.clone(),
        response_id: None,
        correct_count: correct as i32,
        incorrect_count: (total - correct) as i32,
        total_questions: total as i32,
        score,
        rating: ScoreRating::from_score(score),
        results,
    }
}

pub fn score_response(form: &Form, response: &FormResponse) -> TestReport {
    let mut report = score_answers(form, &response.responses);
    report.response_id = Some(response.id.clone());
    report
}

/// Scores every response and averages the percentages. No responses averages to 0.
pub fn aggregate(form: &Form, responses: &[FormResponse]) -> AggregateReport {
    let reports: Vec<TestReport> = responses
        .iter()
        .map(|r| score_response(form, r))
        .collect();

    let average_score = if reports.is_empty() {
        0.0
    } else {
        reports.iter().map(|r| r.score).sum::<f64>() / reports.len() as f64
    };

    AggregateReport {
        form_id: form.id.clone(),
        response_count: reports.len() as i32,
        average_score,
        reports,
    }
}
