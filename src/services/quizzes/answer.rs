use tracing::info;

use crate::errors::{ClassroomError, Result};
use crate::models::quizzes::entities::QuizAttempt;
use crate::models::quizzes::requests::SubmitQuizAnswerRequest;
use crate::models::submissions::entities::{Submission, SubmissionKind};
use crate::services::CommandOutcome;
use crate::services::guard::ensure_student;
use crate::store::ClassroomState;
use crate::utils::validate::required;
use crate::utils::{new_id, now_millis};

/// 学生作答：写入一条测验提交，并追加一条答题记录
pub fn submit_quiz_answer(
    state: &mut ClassroomState,
    req: SubmitQuizAnswerRequest,
) -> Result<CommandOutcome> {
    let student = ensure_student(state, "Please login as a student to submit quiz answers")?;
    let answer = required(&req.answer, "Enter an answer")?;

    let quiz = state
        .find_quiz(req.quiz_id.trim())
        .ok_or_else(|| ClassroomError::not_found("Quiz not found"))?;
    let correct = quiz.is_correct(&answer);
    let quiz_id = quiz.id.clone();
    let question = quiz.question.clone();

    let now = now_millis();
    let submission = Submission {
        id: new_id(),
        kind: SubmissionKind::Quiz,
        target_id: quiz_id.clone(),
        target_title: question,
        student_name: student.name.clone(),
        file_data: None,
        file_name: None,
        answer: Some(answer.clone()),
        grade: None,
        submitted_at: now,
    };
    let attempt = QuizAttempt {
        id: new_id(),
        quiz_id,
        student_name: student.name,
        selected: answer,
        correct,
        at: now,
    };

    info!(
        "Quiz answer for {} from {} (correct: {})",
        attempt.quiz_id, attempt.student_name, correct
    );
    let id = submission.id.clone();
    state.add_submission(submission);
    state.record_quiz_attempt(attempt);
    Ok(CommandOutcome::created("Quiz answer submitted", id))
}
