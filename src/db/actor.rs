use crate::db::models::{
    DbExerciseEntry, DbGoal, DbSleepEntry, DbTodoItem, DbWellnessEntry, EntityKind,
};
use crate::db::patch::{DbPatchable, GoalPatch, TodoPatch};
use crate::db::schema::SQLITE_INIT;
use crate::error::DaybookError;
use chrono::{NaiveDate, Utc};
use daybook_schema::{
    ExerciseEntryCreate, GoalCreate, SleepEntryCreate, TodoCreate, WellnessEntryCreate,
};
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::{debug, info};

type Reply<T> = RpcReplyPort<Result<T, DaybookError>>;

#[derive(Debug)]
pub enum DbActorMessage {
    CreateTodo(TodoCreate, Reply<DbTodoItem>),
    /// All todos in insertion order.
    ListTodos(Reply<Vec<DbTodoItem>>),
    PatchTodo(i64, TodoPatch, Reply<DbTodoItem>),

    CreateSleep(SleepEntryCreate, Reply<DbSleepEntry>),
    /// Newest date first, ties in insertion order.
    ListSleep(Reply<Vec<DbSleepEntry>>),
    /// Mean `hours` over the inclusive date range; `None` when no row matches.
    AverageSleepHours(NaiveDate, NaiveDate, Reply<Option<f64>>),

    CreateWellness(WellnessEntryCreate, Reply<DbWellnessEntry>),
    ListWellness(Reply<Vec<DbWellnessEntry>>),

    CreateExercise(ExerciseEntryCreate, Reply<DbExerciseEntry>),
    ListExercise(Reply<Vec<DbExerciseEntry>>),

    CreateGoal(GoalCreate, Reply<DbGoal>),
    /// Newest `created_at` first.
    ListGoals(Reply<Vec<DbGoal>>),
    PatchGoal(i64, GoalPatch, Reply<DbGoal>),

    /// Delete one row by id from any table; `NotFound` if nothing was deleted.
    Delete(EntityKind, i64, Reply<()>),
}

#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

impl DbActorHandle {
    pub async fn create_todo(&self, create: TodoCreate) -> Result<DbTodoItem, DaybookError> {
        ractor::call!(self.actor, DbActorMessage::CreateTodo, create).map_err(|e| {
            DaybookError::RactorError(format!("DbActor CreateTodo RPC failed: {e}"))
        })?
    }

    pub async fn list_todos(&self) -> Result<Vec<DbTodoItem>, DaybookError> {
        ractor::call!(self.actor, DbActorMessage::ListTodos).map_err(|e| {
            DaybookError::RactorError(format!("DbActor ListTodos RPC failed: {e}"))
        })?
    }

    pub async fn patch_todo(&self, id: i64, patch: TodoPatch) -> Result<DbTodoItem, DaybookError> {
        ractor::call!(self.actor, DbActorMessage::PatchTodo, id, patch).map_err(|e| {
            DaybookError::RactorError(format!("DbActor PatchTodo RPC failed: {e}"))
        })?
    }

    pub async fn create_sleep(&self, create: SleepEntryCreate) -> Result<DbSleepEntry, DaybookError> {
        ractor::call!(self.actor, DbActorMessage::CreateSleep, create).map_err(|e| {
            DaybookError::RactorError(format!("DbActor CreateSleep RPC failed: {e}"))
        })?
    }

    pub async fn list_sleep(&self) -> Result<Vec<DbSleepEntry>, DaybookError> {
        ractor::call!(self.actor, DbActorMessage::ListSleep).map_err(|e| {
            DaybookError::RactorError(format!("DbActor ListSleep RPC failed: {e}"))
        })?
    }

    pub async fn average_sleep_hours(&self, start: NaiveDate, end: NaiveDate) -> Result<Option<f64>, DaybookError> {
        ractor::call!(self.actor, DbActorMessage::AverageSleepHours, start, end).map_err(|e| {
            DaybookError::RactorError(format!("DbActor AverageSleepHours RPC failed: {e}"))
        })?
    }

    pub async fn create_wellness(&self, create: WellnessEntryCreate) -> Result<DbWellnessEntry, DaybookError> {
        ractor::call!(self.actor, DbActorMessage::CreateWellness, create).map_err(|e| {
            DaybookError::RactorError(format!("DbActor CreateWellness RPC failed: {e}"))
        })?
    }

    pub async fn list_wellness(&self) -> Result<Vec<DbWellnessEntry>, DaybookError> {
        ractor::call!(self.actor, DbActorMessage::ListWellness).map_err(|e| {
            DaybookError::RactorError(format!("DbActor ListWellness RPC failed: {e}"))
        })?
    }

    pub async fn create_exercise(&self, create: ExerciseEntryCreate) -> Result<DbExerciseEntry, DaybookError> {
        ractor::call!(self.actor, DbActorMessage::CreateExercise, create).map_err(|e| {
            DaybookError::RactorError(format!("DbActor CreateExercise RPC failed: {e}"))
        })?
    }

    pub async fn list_exercise(&self) -> Result<Vec<DbExerciseEntry>, DaybookError> {
        ractor::call!(self.actor, DbActorMessage::ListExercise).map_err(|e| {
            DaybookError::RactorError(format!("DbActor ListExercise RPC failed: {e}"))
        })?
    }

    pub async fn create_goal(&self, create: GoalCreate) -> Result<DbGoal, DaybookError> {
        ractor::call!(self.actor, DbActorMessage::CreateGoal, create).map_err(|e| {
            DaybookError::RactorError(format!("DbActor CreateGoal RPC failed: {e}"))
        })?
    }

    pub async fn list_goals(&self) -> Result<Vec<DbGoal>, DaybookError> {
        ractor::call!(self.actor, DbActorMessage::ListGoals).map_err(|e| {
            DaybookError::RactorError(format!("DbActor ListGoals RPC failed: {e}"))
        })?
    }

    pub async fn patch_goal(&self, id: i64, patch: GoalPatch) -> Result<DbGoal, DaybookError> {
        ractor::call!(self.actor, DbActorMessage::PatchGoal, id, patch).map_err(|e| {
            DaybookError::RactorError(format!("DbActor PatchGoal RPC failed: {e}"))
        })?
    }

    pub async fn delete(&self, kind: EntityKind, id: i64) -> Result<(), DaybookError> {
        ractor::call!(self.actor, DbActorMessage::Delete, kind, id).map_err(|e| {
            DaybookError::RactorError(format!("DbActor Delete RPC failed: {e}"))
        })?
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbActorMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("DbActor initialized");
        Ok(DbActorState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        let pool = &state.pool;
        match message {
            DbActorMessage::CreateTodo(create, reply) => {
                let _ = reply.send(self.create_todo(pool, create).await);
            }
            DbActorMessage::ListTodos(reply) => {
                let _ = reply.send(self.list_todos(pool).await);
            }
            DbActorMessage::PatchTodo(id, patch, reply) => {
                let _ = reply.send(self.apply_patch(pool, id, patch).await);
            }
            DbActorMessage::CreateSleep(create, reply) => {
                let _ = reply.send(self.create_sleep(pool, create).await);
            }
            DbActorMessage::ListSleep(reply) => {
                let _ = reply.send(self.list_sleep(pool).await);
            }
            DbActorMessage::AverageSleepHours(start, end, reply) => {
                let _ = reply.send(self.average_sleep_hours(pool, start, end).await);
            }
            DbActorMessage::CreateWellness(create, reply) => {
                let _ = reply.send(self.create_wellness(pool, create).await);
            }
            DbActorMessage::ListWellness(reply) => {
                let _ = reply.send(self.list_wellness(pool).await);
            }
            DbActorMessage::CreateExercise(create, reply) => {
                let _ = reply.send(self.create_exercise(pool, create).await);
            }
            DbActorMessage::ListExercise(reply) => {
                let _ = reply.send(self.list_exercise(pool).await);
            }
            DbActorMessage::CreateGoal(create, reply) => {
                let _ = reply.send(self.create_goal(pool, create).await);
            }
            DbActorMessage::ListGoals(reply) => {
                let _ = reply.send(self.list_goals(pool).await);
            }
            DbActorMessage::PatchGoal(id, patch, reply) => {
                let _ = reply.send(self.apply_patch(pool, id, patch).await);
            }
            DbActorMessage::Delete(kind, id, reply) => {
                let _ = reply.send(self.delete(pool, kind, id).await);
            }
        }
        Ok(())
    }
}

// Writes run inside a transaction that commits on success; any early return drops it, which
// rolls back and hands the connection back to the pool.
impl DbActor {
    async fn create_todo(
        &self,
        pool: &SqlitePool,
        create: TodoCreate,
    ) -> Result<DbTodoItem, DaybookError> {
        let mut tx = pool.begin().await?;
        let row = sqlx::query_as::<_, DbTodoItem>(
            r#"
        INSERT INTO todo_items (title, description, category, completed)
        VALUES (?, ?, ?, 0)
        RETURNING id, title, description, category, completed
        "#,
        )
        .bind(create.title.as_str())
        .bind(create.description.as_deref())
        .bind(create.category_or_default())
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        debug!(table = EntityKind::Todo.table(), id = row.id, "db row created");
        Ok(row)
    }

    async fn list_todos(&self, pool: &SqlitePool) -> Result<Vec<DbTodoItem>, DaybookError> {
        let rows = sqlx::query_as::<_, DbTodoItem>(
            r#"
        SELECT id, title, description, category, completed
        FROM todo_items
        ORDER BY id
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn create_sleep(
        &self,
        pool: &SqlitePool,
        create: SleepEntryCreate,
    ) -> Result<DbSleepEntry, DaybookError> {
        let mut tx = pool.begin().await?;
        let row = sqlx::query_as::<_, DbSleepEntry>(
            r#"
        INSERT INTO sleep_entries (date, hours, notes)
        VALUES (?, ?, ?)
        RETURNING id, date, hours, notes
        "#,
        )
        .bind(create.date)
        .bind(create.hours)
        .bind(create.notes)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        debug!(table = EntityKind::Sleep.table(), id = row.id, "db row created");
        Ok(row)
    }

    async fn list_sleep(&self, pool: &SqlitePool) -> Result<Vec<DbSleepEntry>, DaybookError> {
        let rows = sqlx::query_as::<_, DbSleepEntry>(
            r#"
        SELECT id, date, hours, notes
        FROM sleep_entries
        ORDER BY date DESC, id ASC
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn average_sleep_hours(
        &self,
        pool: &SqlitePool,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<f64>, DaybookError> {
        let avg: Option<f64> = sqlx::query_scalar(
            r#"
        SELECT AVG(hours)
        FROM sleep_entries
        WHERE date >= ? AND date <= ?
        "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(pool)
        .await?;

        Ok(avg)
    }

    async fn create_wellness(
        &self,
        pool: &SqlitePool,
        create: WellnessEntryCreate,
    ) -> Result<DbWellnessEntry, DaybookError> {
        let mut tx = pool.begin().await?;
        let row = sqlx::query_as::<_, DbWellnessEntry>(
            r#"
        INSERT INTO wellness_entries (date, mood, energy, notes)
        VALUES (?, ?, ?, ?)
        RETURNING id, date, mood, energy, notes
        "#,
        )
        .bind(create.date)
        .bind(create.mood)
        .bind(create.energy)
        .bind(create.notes)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        debug!(table = EntityKind::Wellness.table(), id = row.id, "db row created");
        Ok(row)
    }

    async fn list_wellness(
        &self,
        pool: &SqlitePool,
    ) -> Result<Vec<DbWellnessEntry>, DaybookError> {
        let rows = sqlx::query_as::<_, DbWellnessEntry>(
            r#"
        SELECT id, date, mood, energy, notes
        FROM wellness_entries
        ORDER BY date DESC, id ASC
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn create_exercise(
        &self,
        pool: &SqlitePool,
        create: ExerciseEntryCreate,
    ) -> Result<DbExerciseEntry, DaybookError> {
        let mut tx = pool.begin().await?;
        let row = sqlx::query_as::<_, DbExerciseEntry>(
            r#"
        INSERT INTO exercise_entries (date, title, duration, intensity, notes)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, date, title, duration, intensity, notes
        "#,
        )
        .bind(create.date)
        .bind(create.title)
        .bind(create.duration)
        .bind(create.intensity)
        .bind(create.notes)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        debug!(table = EntityKind::Exercise.table(), id = row.id, "db row created");
        Ok(row)
    }

    async fn list_exercise(
        &self,
        pool: &SqlitePool,
    ) -> Result<Vec<DbExerciseEntry>, DaybookError> {
        let rows = sqlx::query_as::<_, DbExerciseEntry>(
            r#"
        SELECT id, date, title, duration, intensity, notes
        FROM exercise_entries
        ORDER BY date DESC, id ASC
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn create_goal(
        &self,
        pool: &SqlitePool,
        create: GoalCreate,
    ) -> Result<DbGoal, DaybookError> {
        let now = Utc::now();
        let mut tx = pool.begin().await?;
        let row = sqlx::query_as::<_, DbGoal>(
            r#"
        INSERT INTO goals (text, done, created_at)
        VALUES (?, ?, ?)
        RETURNING id, text, done, created_at
        "#,
        )
        .bind(create.text)
        .bind(create.done)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        debug!(table = EntityKind::Goal.table(), id = row.id, "db row created");
        Ok(row)
    }

    async fn list_goals(&self, pool: &SqlitePool) -> Result<Vec<DbGoal>, DaybookError> {
        let rows = sqlx::query_as::<_, DbGoal>(
            r#"
        SELECT id, text, done, created_at
        FROM goals
        ORDER BY created_at DESC, id DESC
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn apply_patch<P>(
        &self,
        pool: &SqlitePool,
        id: i64,
        patch: P,
    ) -> Result<P::Row, DaybookError>
    where
        P: DbPatchable + Send + Sync,
    {
        let mut tx = pool.begin().await?;
        let row = patch.apply_patch(id, &mut *tx).await?;
        tx.commit().await?;
        Ok(row)
    }

    async fn delete(
        &self,
        pool: &SqlitePool,
        kind: EntityKind,
        id: i64,
    ) -> Result<(), DaybookError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", kind.table());

        let mut tx = pool.begin().await?;
        let affected = sqlx::query(&sql)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        debug!(table = kind.table(), id, affected, "db delete applied");
        if affected == 0 {
            return Err(DaybookError::NotFound {
                entity: kind.label(),
                id,
            });
        }

        tx.commit().await?;
        Ok(())
    }
}

/// Spawn the database actor and return a cloneable handle.
///
/// The actor is unnamed so several stores can coexist in one process (tests do this).
pub async fn spawn(database_url: &str) -> Result<DbActorHandle, DaybookError> {
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, database_url.to_string())
        .await
        .map_err(|e| DaybookError::RactorError(format!("failed to spawn DbActor: {e}")))?;

    Ok(DbActorHandle { actor })
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), DaybookError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
