//! Repository for the `event_setup_progress` table.
//!
//! Flag columns are selected from [`ProgressFlag::column`](vowplan_core::setup_wizard::ProgressFlag::column), which only
//! yields static identifiers, so they are safe to splice into SQL.

use sqlx::{PgPool, Postgres, Transaction};
use vowplan_core::setup_wizard::{all_flags_sql, WizardStep, INITIAL_STEP};
use vowplan_core::types::DbId;

use crate::models::setup_progress::SetupProgress;

/// Column list for `event_setup_progress` queries.
const COLUMNS: &str = "id, event_id, current_step, basic_info_complete, venues_complete, \
    rsvp_complete, accommodation_complete, transport_complete, communication_complete, \
    styling_complete, completed_at, created_at, updated_at";

/// Provides progress tracking operations for the setup wizard.
pub struct SetupProgressRepo;

impl SetupProgressRepo {
    /// Find the progress record of an event.
    pub async fn find_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Option<SetupProgress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM event_setup_progress WHERE event_id = $1");
        sqlx::query_as::<_, SetupProgress>(&query)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }

    /// Return the progress record of an event, creating the default one
    /// (no flags set, first step current) if none exists yet.
    pub async fn get_or_create(pool: &PgPool, event_id: DbId) -> Result<SetupProgress, sqlx::Error> {
        let insert = format!(
            "INSERT INTO event_setup_progress (event_id, current_step) \
             VALUES ($1, $2) \
             ON CONFLICT (event_id) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, SetupProgress>(&insert)
            .bind(event_id)
            .bind(INITIAL_STEP.as_str())
            .fetch_optional(pool)
            .await?;

        match created {
            Some(progress) => {
                tracing::debug!(event_id, "Created default setup progress");
                Ok(progress)
            }
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM event_setup_progress WHERE event_id = $1");
                sqlx::query_as::<_, SetupProgress>(&query)
                    .bind(event_id)
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// Record that `step` was saved.
    ///
    /// Tracked steps set their flag; every step except `whatsapp` becomes
    /// the current step. A missing record is inserted with only this step's
    /// flag set. `completed_at` is then recomputed from the flags. Returns
    /// `None` for steps that do not update progress.
    pub async fn record_step(
        pool: &PgPool,
        event_id: DbId,
        step: WizardStep,
    ) -> Result<Option<SetupProgress>, sqlx::Error> {
        if !step.updates_progress() {
            return Ok(None);
        }

        let (insert_cols, insert_vals, flag_set) = match step.flag() {
            Some(flag) => {
                let col = flag.column();
                (
                    format!(", {col}"),
                    ", true",
                    format!("{col} = true, "),
                )
            }
            None => (String::new(), "", String::new()),
        };

        let upsert = format!(
            "INSERT INTO event_setup_progress (event_id, current_step{insert_cols}) \
             VALUES ($1, $2{insert_vals}) \
             ON CONFLICT (event_id) DO UPDATE SET \
                {flag_set}current_step = EXCLUDED.current_step, \
                updated_at = NOW()"
        );

        let mut tx = pool.begin().await?;
        sqlx::query(&upsert)
            .bind(event_id)
            .bind(step.as_str())
            .execute(&mut *tx)
            .await?;
        let progress = Self::refresh_completion_inner(&mut tx, event_id).await?;
        tx.commit().await?;

        Ok(Some(progress))
    }

    /// Clear the flag of `step` and `completed_at`.
    ///
    /// `ai_assistant` has no flag, so only the timestamps change. Returns
    /// `None` if the event has no progress record.
    pub async fn reset_step(
        pool: &PgPool,
        event_id: DbId,
        step: WizardStep,
    ) -> Result<Option<SetupProgress>, sqlx::Error> {
        let flag_set = step
            .flag()
            .map(|f| format!("{} = false, ", f.column()))
            .unwrap_or_default();

        let query = format!(
            "UPDATE event_setup_progress SET \
                {flag_set}completed_at = NULL, \
                updated_at = NOW() \
             WHERE event_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SetupProgress>(&query)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }

    /// Set `completed_at` to now when every tracked flag is set, or clear
    /// it otherwise.
    async fn refresh_completion_inner(
        tx: &mut Transaction<'_, Postgres>,
        event_id: DbId,
    ) -> Result<SetupProgress, sqlx::Error> {
        let all_done = all_flags_sql();
        let query = format!(
            "UPDATE event_setup_progress SET \
                completed_at = CASE WHEN {all_done} THEN NOW() ELSE NULL END \
             WHERE event_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SetupProgress>(&query)
            .bind(event_id)
            .fetch_one(&mut **tx)
            .await
    }
}
