//! fireadmin - collect admin account info and print the Firestore
//! command that creates the record.
//!
//! Usage:
//!   fireadmin                                        # prompt for everything
//!   fireadmin --uid abc123 --email a@b.com --name Alice   # no prompts

use fireadmin::command;
use fireadmin::prompts::{self, ADMIN_FIELDS};
use fireadmin::record::AdminRecord;

use anyhow::Result;
use clap::Parser;
use rustyline::DefaultEditor;
use std::collections::HashMap;

/// Create an admin account record in Firestore
#[derive(Parser)]
#[command(name = "fireadmin", about = "Create an admin account record in Firestore")]
struct Args {
    #[arg(
        long,
        env = "FIREADMIN_UID",
        help = "Firebase User ID (UID) of the account to promote"
    )]
    uid: Option<String>,

    #[arg(
        long,
        env = "FIREADMIN_EMAIL",
        help = "Email address stored on the admin record"
    )]
    email: Option<String>,

    #[arg(
        long,
        env = "FIREADMIN_NAME",
        help = "Display name stored on the admin record"
    )]
    name: Option<String>,
}

fn main() -> Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    println!("🔐 Creating Admin Account in Firestore...\n");

    // Flag and env values pre-seed the answers; anything missing is
    // prompted for, in field order.
    let mut answers: HashMap<String, String> = HashMap::new();
    if let Some(uid) = args.uid {
        answers.insert("uid".to_string(), uid);
    }
    if let Some(email) = args.email {
        answers.insert("email".to_string(), email);
    }
    if let Some(name) = args.name {
        answers.insert("name".to_string(), name);
    }

    let mut rl = DefaultEditor::new()?;
    prompts::fill_missing(ADMIN_FIELDS, &mut answers, &mut rl)
        .map_err(|e| anyhow::anyhow!(e))?;

    let uid = answers.remove("uid").unwrap_or_default();
    let email = answers.remove("email").unwrap_or_default();
    let name = answers.remove("name").unwrap_or_default();
    let record = AdminRecord::new(email, name);

    println!("\n📋 Admin Data to Create:");
    println!("{}", serde_json::to_string_pretty(&record)?);
    println!("\n📝 Run this command with the Firebase CLI:");
    println!("{}", command::firestore_set(&uid, &record)?);

    Ok(())
}
