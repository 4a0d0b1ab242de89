//! Axum route handlers for the four editors.
//!
//! Every handler locks the store, runs one editor operation and responds with
//! the published slice. Generation handlers read their inputs, release the
//! lock for the provider call, then re-lock to apply the result.

use axum::{extract::State, Json};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::info;

use crate::editors::entries::{edit_slice, ListEntry};
use crate::editors::experience::ExperienceField;
use crate::editors::personal_info::{PersonalField, PersonalInfoEditor};
use crate::editors::skills::SkillsEditor;
use crate::editors::EditorError;
use crate::errors::AppError;
use crate::extract::{AppJson, AppPath};
use crate::generation::GenerationError;
use crate::models::resume::{EntryId, ExperienceEntry, PersonalInfo, ResumeRecord};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FieldEdit<F> {
    pub field: F,
    pub value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentToggle {
    pub is_current: bool,
}

#[derive(Debug, Deserialize)]
pub struct SkillInput {
    pub skill: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsGenerateRequest {
    pub job_title: String,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeRecord> {
    Json(state.store.lock().await.snapshot())
}

// ────────────────────────────────────────────────────────────────────────────
// Personal info
// ────────────────────────────────────────────────────────────────────────────

/// PUT /api/v1/resume/personal-info
pub async fn handle_replace_personal_info(
    State(state): State<AppState>,
    AppJson(info): AppJson<PersonalInfo>,
) -> Json<PersonalInfo> {
    state.store.lock().await.set_personal_info(info.clone());
    Json(info)
}

/// PATCH /api/v1/resume/personal-info
pub async fn handle_edit_personal_info(
    State(state): State<AppState>,
    AppJson(edit): AppJson<FieldEdit<PersonalField>>,
) -> Json<PersonalInfo> {
    let mut store = state.store.lock().await;
    let current = store.record().personal_info.clone();
    let mut editor = PersonalInfoEditor::new(current, |info| store.set_personal_info(info));
    editor.set_field(edit.field, edit.value);
    Json(editor.into_info())
}

/// POST /api/v1/resume/personal-info/summary
///
/// Generates a summary from the current job title and writes it into the
/// summary field.
pub async fn handle_generate_summary(
    State(state): State<AppState>,
) -> Result<Json<PersonalInfo>, AppError> {
    let title = state.store.lock().await.record().personal_info.title.clone();
    if title.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter a job title to generate a summary".to_string(),
        ));
    }

    let summary = state
        .generator
        .generate_summary(&title)
        .await
        .map_err(|e| generation_error("summary", e))?;

    let mut store = state.store.lock().await;
    let current = store.record().personal_info.clone();
    let mut editor = PersonalInfoEditor::new(current, |info| store.set_personal_info(info));
    editor.set_field(PersonalField::Summary, summary);
    Ok(Json(editor.into_info()))
}

// ────────────────────────────────────────────────────────────────────────────
// Experience / education (shared over `ListEntry`)
// ────────────────────────────────────────────────────────────────────────────

/// PUT /api/v1/resume/{experience,education}
pub async fn handle_replace_entries<E>(
    State(state): State<AppState>,
    AppJson(entries): AppJson<Vec<E>>,
) -> Json<Vec<E>>
where
    E: ListEntry + Serialize + DeserializeOwned,
{
    let mut store = state.store.lock().await;
    E::publish(&mut *store, entries.clone());
    Json(entries)
}

/// POST /api/v1/resume/{experience,education}
pub async fn handle_add_entry<E>(State(state): State<AppState>) -> Result<Json<Vec<E>>, AppError>
where
    E: ListEntry + Serialize,
{
    let mut store = state.store.lock().await;
    let entries = edit_slice::<E, _>(&mut store, |editor| {
        editor.add();
        Ok(())
    })?;
    Ok(Json(entries))
}

/// PATCH /api/v1/resume/{experience,education}/:id
pub async fn handle_edit_entry<E>(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    AppJson(edit): AppJson<FieldEdit<E::Field>>,
) -> Result<Json<Vec<E>>, AppError>
where
    E: ListEntry + Serialize,
{
    let id = EntryId::from(id);
    let mut store = state.store.lock().await;
    let entries = edit_slice::<E, _>(&mut store, |editor| {
        editor.edit_field(&id, edit.field, edit.value)
    })?;
    Ok(Json(entries))
}

/// PUT /api/v1/resume/{experience,education}/:id/current
pub async fn handle_set_current<E>(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    AppJson(toggle): AppJson<CurrentToggle>,
) -> Result<Json<Vec<E>>, AppError>
where
    E: ListEntry + Serialize,
{
    let id = EntryId::from(id);
    let mut store = state.store.lock().await;
    let entries = edit_slice::<E, _>(&mut store, |editor| editor.set_current(&id, toggle.is_current))?;
    Ok(Json(entries))
}

/// DELETE /api/v1/resume/{experience,education}/:id
pub async fn handle_remove_entry<E>(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<Vec<E>>, AppError>
where
    E: ListEntry + Serialize,
{
    let id = EntryId::from(id);
    let mut store = state.store.lock().await;
    let entries = edit_slice::<E, _>(&mut store, |editor| editor.remove(&id))?;
    Ok(Json(entries))
}

/// POST /api/v1/resume/experience/:id/description
///
/// Generates a description from the entry's position and company. If the
/// entry is removed while the provider call is running, nothing is written.
pub async fn handle_generate_description(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<Vec<ExperienceEntry>>, AppError> {
    let id = EntryId::from(id);
    let (position, company) = {
        let store = state.store.lock().await;
        let entry = store
            .record()
            .experience
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::from(EditorError::EntryNotFound(id.clone())))?;
        (entry.position.clone(), entry.company.clone())
    };
    if position.trim().is_empty() || company.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter a position and company to generate a description".to_string(),
        ));
    }

    let description = state
        .generator
        .generate_job_description(&position, &company)
        .await
        .map_err(|e| generation_error("job description", e))?;

    let mut store = state.store.lock().await;
    let entries = edit_slice::<ExperienceEntry, _>(&mut store, |editor| {
        editor.edit_field(&id, ExperienceField::Description, description)
    })?;
    Ok(Json(entries))
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// PUT /api/v1/resume/skills
///
/// Labels are trimmed; the whole request is rejected if any label is empty
/// or repeated.
pub async fn handle_replace_skills(
    State(state): State<AppState>,
    AppJson(skills): AppJson<Vec<String>>,
) -> Result<Json<Vec<String>>, AppError> {
    let mut editor = SkillsEditor::new(Vec::new(), |_| {});
    for skill in &skills {
        editor.add(skill)?;
    }
    let skills = editor.into_skills();
    state.store.lock().await.set_skills(skills.clone());
    Ok(Json(skills))
}

/// POST /api/v1/resume/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    AppJson(input): AppJson<SkillInput>,
) -> Result<Json<Vec<String>>, AppError> {
    let mut store = state.store.lock().await;
    let current = store.record().skills.clone();
    let mut editor = SkillsEditor::new(current, |skills| store.set_skills(skills));
    editor.add(&input.skill)?;
    Ok(Json(editor.into_skills()))
}

/// DELETE /api/v1/resume/skills/:index
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    AppPath(index): AppPath<usize>,
) -> Result<Json<Vec<String>>, AppError> {
    let mut store = state.store.lock().await;
    let current = store.record().skills.clone();
    let mut editor = SkillsEditor::new(current, |skills| store.set_skills(skills));
    editor.remove(index)?;
    Ok(Json(editor.into_skills()))
}

/// POST /api/v1/resume/skills/generate
///
/// Appends generated labels that are not already in the list.
pub async fn handle_generate_skills(
    State(state): State<AppState>,
    AppJson(req): AppJson<SkillsGenerateRequest>,
) -> Result<Json<Vec<String>>, AppError> {
    if req.job_title.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter a job title to generate skills".to_string(),
        ));
    }

    let generated = state
        .generator
        .generate_skills_list(&req.job_title)
        .await
        .map_err(|e| generation_error("skills", e))?;

    let mut store = state.store.lock().await;
    let current = store.record().skills.clone();
    let mut editor = SkillsEditor::new(current, |skills| store.set_skills(skills));
    let added = editor.merge(generated);
    info!("Merged {added} generated skills");
    Ok(Json(editor.into_skills()))
}

/// A refused call (flag already raised) is a conflict; a call that ran and
/// failed is reported as a generation failure.
fn generation_error(what: &str, e: GenerationError) -> AppError {
    match e {
        GenerationError::Busy => {
            AppError::Conflict("A generation is already in progress".to_string())
        }
        GenerationError::MissingInput(_) => AppError::Validation(e.to_string()),
        GenerationError::NotConfigured
        | GenerationError::Provider(_)
        | GenerationError::EmptyReply => {
            AppError::Generation(format!("Failed to generate {what}. Please try again."))
        }
    }
}
