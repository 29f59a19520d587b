//! CLI administration tool for campus-life.
//!
//! Issues and revokes API sessions, shows record counts and runs database
//! diagnostics without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Issue a token for a student
//! cargo run --bin admin -- session create --student-id 202301010101
//!
//! # List all sessions
//! cargo run --bin admin -- session list
//!
//! # Revoke a session by id or name
//! cargo run --bin admin -- session revoke "Mini program"
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `TOKEN_SIGNING_SECRET` (required for `session create`): must match the server's

use campus_life::application::services::auth_service::hash_token;
use campus_life::config::mask_connection_string;
use campus_life::domain::repositories::SessionRepository;
use campus_life::infrastructure::persistence::PgSessionRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing campus-life.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage API sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Show record counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Issue a token for a student
    Create {
        /// Student id the token authenticates as
        #[arg(short, long)]
        student_id: String,

        /// Session label (e.g., "Mini program")
        #[arg(short, long)]
        name: Option<String>,

        /// Custom token value (auto-generated if not provided)
        #[arg(short, long)]
        token: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all sessions
    List,

    /// Revoke a session
    Revoke {
        /// Session id or name
        id_or_name: String,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Session { action } => handle_session_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_session_action(action: SessionAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgSessionRepository::new(Arc::new(pool.clone())));

    match action {
        SessionAction::Create {
            student_id,
            name,
            token,
            yes,
        } => create_session(repo, student_id, name, token, yes).await?,
        SessionAction::List => list_sessions(repo).await?,
        SessionAction::Revoke { id_or_name } => revoke_session(repo, id_or_name).await?,
    }

    Ok(())
}

/// Issues a new session token.
///
/// Only the HMAC-SHA256 hash keyed by `TOKEN_SIGNING_SECRET` is stored; the raw
/// token is shown once.
async fn create_session(
    repo: Arc<PgSessionRepository>,
    student_id: String,
    name: Option<String>,
    token: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    let secret =
        std::env::var("TOKEN_SIGNING_SECRET").context("TOKEN_SIGNING_SECRET must be set")?;
    if secret.is_empty() {
        anyhow::bail!("TOKEN_SIGNING_SECRET must not be empty");
    }

    let student_id = student_id.trim().to_string();
    if student_id.is_empty() {
        anyhow::bail!("--student-id must not be empty");
    }

    println!("{}", "🔑 Create API Session".bright_blue().bold());
    println!();

    let session_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Session name")
            .with_initial_text("Mini program")
            .interact_text()?,
    };

    let token_value = match token {
        Some(t) => {
            println!("{}", "⚠️  Using provided token value".yellow());
            t
        }
        None => {
            println!("{}", "✨ Generated new token".green());
            generate_token()
        }
    };

    println!();
    println!("{}", "Session details:".bright_white().bold());
    println!("  Student: {}", student_id.cyan());
    println!("  Name:    {}", session_name.cyan());
    println!("  Token:   {}", token_value.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this session?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let token_hash = hash_token(&secret, &token_value);

    let session = repo
        .create(&student_id, &session_name, &token_hash)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create session: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "✅ Session created successfully!".green().bold(),
        session.id
    );
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/api/lost-and-found/latest",
        token_value.bright_yellow()
    );
    println!();

    Ok(())
}

async fn list_sessions(repo: Arc<PgSessionRepository>) -> Result<()> {
    println!("{}", "📋 API Sessions".bright_blue().bold());
    println!();

    let sessions = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list sessions: {}", e))?;

    if sessions.is_empty() {
        println!("{}", "  No sessions found".yellow());
        println!();
        println!(
            "  Create one with: {} admin -- session create --student-id <id>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<16} {:<24} {:<18} {:<18} {:<8}",
        "ID".bright_white().bold(),
        "Student".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold(),
        "Last used".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(92).bright_black());

    for session in &sessions {
        let status = if session.is_revoked() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };
        let last_used = session
            .last_used_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "  {:<5} {:<16} {:<24} {:<18} {:<18} {}",
            session.id.to_string().bright_black(),
            session.student_id.cyan(),
            session.name,
            session
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            last_used.bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        sessions.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Revokes a session by id (numeric input) or exact name, after confirmation.
async fn revoke_session(repo: Arc<PgSessionRepository>, id_or_name: String) -> Result<()> {
    println!("{}", "🔒 Revoke API Session".bright_blue().bold());
    println!();

    let session = match id_or_name.parse::<i64>() {
        Ok(id) => repo.find_by_id(id).await,
        Err(_) => repo.find_by_name(&id_or_name).await,
    }
    .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    .context("Session not found")?;

    if session.is_revoked() {
        println!("{}", "⚠️  This session is already revoked".yellow());
        return Ok(());
    }

    println!("  Session: {}", session.name.cyan());
    println!("  Student: {}", session.student_id.cyan());
    println!("  ID:      {}", session.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this session?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    repo.revoke(session.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke session: {}", e))?;

    println!();
    println!("{}", "✅ Session revoked successfully!".green().bold());
    println!();

    Ok(())
}

/// Displays record counts by review state, QR codes and active sessions.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (approved, pending, withdrawn): (i64, i64, i64) = sqlx::query_as(
        "SELECT COUNT(*) FILTER (WHERE is_approved = 1), \
                COUNT(*) FILTER (WHERE is_approved = 2), \
                COUNT(*) FILTER (WHERE is_approved = 0) \
         FROM lost_and_found_records",
    )
    .fetch_one(pool)
    .await?;

    let qrcodes_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM qrcodes")
        .fetch_one(pool)
        .await?;

    let sessions_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM api_sessions WHERE revoked_at IS NULL")
            .fetch_one(pool)
            .await?;

    println!("  {}", "Lost and found".bright_white().bold());
    println!("    Approved:      {}", approved.to_string().bright_green().bold());
    println!("    Pending:       {}", pending.to_string().yellow().bold());
    println!("    Withdrawn:     {}", withdrawn.to_string().bright_black());
    println!(
        "  QR codes:        {}",
        qrcodes_count.to_string().bright_green().bold()
    );
    println!(
        "  Active sessions: {}",
        sessions_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
                    .fetch_one(pool)
                    .await
                    .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

/// Generates a random 48-character alphanumeric token.
fn generate_token() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
