use std::{
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use eframe::egui;
use tango::{
    core::{
        StudySession,
        TangoError,
        VocabularyStore,
    },
    gui::{
        settings::{
            Preferences,
            SETTINGS_FILE,
        },
        TangoApp,
    },
    persistence::{
        load_json_or_default,
        set_app_data_dir,
    },
};
use tracing::{
    error,
    info,
};
use tracing_subscriber::EnvFilter;

/// Japanese vocabulary flashcards
#[derive(Parser, Debug)]
#[command(name = "tango")]
#[command(about = "Study Japanese vocabulary with flip-and-swipe flashcards")]
struct Args {
    /// Vocabulary JSON file to study instead of the bundled set
    #[arg(short, long)]
    vocabulary: Option<PathBuf>,

    /// Directory for saved preferences
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Seed for deck shuffling, for reproducible card order
    #[arg(short, long)]
    seed: Option<u64>,
}

/// Picks the vocabulary to open. A file that fails to load falls back to the
/// bundled set, and the failure is handed back so the UI can report it.
fn resolve_vocabulary(
    requested: Option<&PathBuf>,
) -> Result<(VocabularyStore, Option<TangoError>), TangoError> {
    let Some(path) = requested else {
        return Ok((VocabularyStore::bundled()?, None));
    };

    match VocabularyStore::load(path) {
        Ok(store) => Ok((store, None)),
        Err(e) => {
            error!("Failed to load vocabulary {}: {}", path.display(), e);
            Ok((VocabularyStore::bundled()?, Some(e)))
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if let Some(dir) = args.data_dir {
        set_app_data_dir(dir);
    }

    let preferences = load_json_or_default::<Preferences>(SETTINGS_FILE);
    let requested = args.vocabulary.as_ref().or(preferences.vocabulary_path.as_ref());

    let (store, startup_error) = match resolve_vocabulary(requested) {
        Ok(resolved) => resolved,
        Err(e) => {
            error!("No usable vocabulary: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Studying {} ({} words)", store.name(), store.len());

    let session = StudySession::with_seed(
        store,
        preferences.type_filter(),
        preferences.display_config(),
        args.seed,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tango")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([360.0, 520.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Tango",
        options,
        Box::new(move |cc| Ok(Box::new(TangoApp::new(cc, session, preferences, startup_error)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Application error: {}", e);
            ExitCode::FAILURE
        }
    }
}
