//! Built-in business entity kinds.
//!
//! Identifiers, foreign keys and audit timestamps stay in cleartext so the
//! document store can filter and join on them. Names, descriptions, notes
//! and other prose are encrypted.

use crate::error::ModelResult;
use crate::registry::ManifestRegistry;
use crate::schema::FieldSpec;

/// Strategic objective for a planning period.
pub const ROCK: &str = "rock";
/// Weekly milestone under a rock.
pub const TASK: &str = "task";
/// Short-horizon action item.
pub const TODO: &str = "todo";
/// Raised issue and its discussion.
pub const ISSUE: &str = "issue";
/// Planning period.
pub const QUARTER: &str = "quarter";

pub const BUSINESS_ENTITY_KINDS: [&str; 5] = [ROCK, TASK, TODO, ISSUE, QUARTER];

fn audit_fields() -> [FieldSpec; 2] {
    [
        FieldSpec::timestamp("created_at", true),
        FieldSpec::timestamp("updated_at", true),
    ]
}

pub fn rock_fields() -> Vec<FieldSpec> {
    let mut fields = vec![
        FieldSpec::unique_id("id", true),
        FieldSpec::unique_id("rock_id", true),
        FieldSpec::scalar("rock_name", false),
        FieldSpec::scalar("smart_objective", false),
        FieldSpec::unique_id("quarter_id", true),
        FieldSpec::unique_id("assigned_to_id", true),
        FieldSpec::scalar("assigned_to_name", false),
    ];
    fields.extend(audit_fields());
    fields
}

pub fn task_fields() -> Vec<FieldSpec> {
    let mut fields = vec![
        FieldSpec::unique_id("id", true),
        FieldSpec::unique_id("rock_id", true),
        FieldSpec::scalar("week", false),
        FieldSpec::unique_id("task_id", true),
        FieldSpec::scalar("task", false),
        FieldSpec::scalar("sub_tasks", false),
        FieldSpec::scalar("comments", false),
    ];
    fields.extend(audit_fields());
    fields
}

pub fn todo_fields() -> Vec<FieldSpec> {
    let mut fields = vec![
        FieldSpec::unique_id("id", true),
        FieldSpec::unique_id("todo_id", true),
        FieldSpec::scalar("task_title", false),
        FieldSpec::scalar("assigned_to", false),
        FieldSpec::scalar("designation", false),
        FieldSpec::calendar_date("due_date", false),
        FieldSpec::scalar("linked_issue", false),
        FieldSpec::scalar("status", false),
        FieldSpec::unique_id("quarter_id", true),
        FieldSpec::unique_id("assigned_to_id", true),
    ];
    fields.extend(audit_fields());
    fields
}

pub fn issue_fields() -> Vec<FieldSpec> {
    let mut fields = vec![
        FieldSpec::unique_id("id", true),
        FieldSpec::unique_id("issue_id", true),
        FieldSpec::scalar("issue_title", false),
        FieldSpec::scalar("description", false),
        FieldSpec::scalar("raised_by", false),
        FieldSpec::scalar("discussion_notes", false),
        FieldSpec::scalar("linked_solution_type", false),
        FieldSpec::scalar("linked_solution_ref", false),
        FieldSpec::scalar("status", false),
        FieldSpec::unique_id("quarter_id", true),
        FieldSpec::unique_id("raised_by_id", true),
    ];
    fields.extend(audit_fields());
    fields
}

pub fn quarter_fields() -> Vec<FieldSpec> {
    let mut fields = vec![
        FieldSpec::unique_id("id", true),
        FieldSpec::scalar("quarter", false),
        FieldSpec::scalar("weeks", false),
        FieldSpec::scalar("year", false),
        FieldSpec::scalar("title", false),
        FieldSpec::scalar("description", false),
        FieldSpec::unique_id_list("participants", true),
        FieldSpec::scalar("status", false),
    ];
    fields.extend(audit_fields());
    fields
}

/// Field specs for a built-in kind, or `None` for anything else.
pub fn business_entity_fields(entity_kind: &str) -> Option<Vec<FieldSpec>> {
    match entity_kind {
        ROCK => Some(rock_fields()),
        TASK => Some(task_fields()),
        TODO => Some(todo_fields()),
        ISSUE => Some(issue_fields()),
        QUARTER => Some(quarter_fields()),
        _ => None,
    }
}

/// Registers all five business entity kinds.
pub fn register_business_entities(registry: &mut ManifestRegistry) -> ModelResult<()> {
    registry.register(ROCK, rock_fields())?;
    registry.register(TASK, task_fields())?;
    registry.register(TODO, todo_fields())?;
    registry.register(ISSUE, issue_fields())?;
    registry.register(QUARTER, quarter_fields())?;
    Ok(())
}
