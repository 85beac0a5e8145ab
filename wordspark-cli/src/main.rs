use wordspark_core::topic::{TopicError, validate_topic};
use wordspark_engine::controller::GenerationController;
use wordspark_runtime::builder::build_controller;
use wordspark_runtime::settings::{Settings, SettingsStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let raw_topic = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            eprintln!("usage: wordspark <topic>");
            eprintln!();
            eprintln!("Generates a growing list of words related to a word or short phrase.");
            eprintln!("Configure via {} or env:", settings_path());
            eprintln!("  WORDSPARK_BASE_URL   OpenAI-compatible endpoint (default: offline mock)");
            eprintln!("  WORDSPARK_MODEL      model name (default: gpt-4o-mini)");
            eprintln!("  WORDSPARK_API_KEY    bearer token for the endpoint");
            eprintln!("  WORDSPARK_MAX_TURNS  generation turns per topic, 3-10 (default: 5)");
            std::process::exit(2);
        }
    };

    let topic = match validate_topic(&raw_topic) {
        Ok(topic) => topic,
        Err(TopicError::Empty) => {
            eprintln!("topic is empty");
            std::process::exit(2);
        }
        Err(TopicError::TooManyWords) => {
            eprintln!("keep the topic to a word or a two-word phrase");
            std::process::exit(2);
        }
    };

    let settings = load_settings()?;
    let api_key = std::env::var("WORDSPARK_API_KEY").unwrap_or_default();

    let controller = build_controller(&settings, &api_key);
    let availability = controller.refresh_availability().await;
    if let wordspark_engine::traits::Availability::Unavailable { reason } = availability {
        eprintln!("The model isn't available: {reason}");
        std::process::exit(1);
    }

    controller.generate(&topic).await?;
    stream_words(&controller).await;

    Ok(())
}

/// Prints words as they are published, then reports any run-ending error.
async fn stream_words(controller: &GenerationController) {
    let mut rx = controller.subscribe();
    let mut printed = 0;

    loop {
        let state = rx.borrow_and_update().clone();
        for word in &state.words[printed..] {
            println!("{word}");
        }
        printed = state.words.len();

        if !state.is_generating {
            if let Some(kind) = state.last_error {
                eprintln!("{}", kind.user_message());
            } else {
                log::info!("run finished with {printed} words");
            }
            return;
        }

        if rx.changed().await.is_err() {
            return;
        }
    }
}

fn settings_path() -> String {
    std::env::var("WORDSPARK_SETTINGS").unwrap_or_else(|_| "wordspark.json".into())
}

fn load_settings() -> anyhow::Result<Settings> {
    let store = SettingsStore::at_path(settings_path());
    let mut settings = store.load()?;

    // Env overrides beat the settings file.
    if let Ok(base_url) = std::env::var("WORDSPARK_BASE_URL") {
        if !base_url.trim().is_empty() {
            settings.base_url = Some(base_url);
        }
    }
    if let Ok(model) = std::env::var("WORDSPARK_MODEL") {
        if !model.trim().is_empty() {
            settings.model = model;
        }
    }
    if let Ok(turns) = std::env::var("WORDSPARK_MAX_TURNS") {
        match turns.parse::<u32>() {
            Ok(value) => settings.max_turns = wordspark_core::config::clamp_max_turns(value),
            Err(_) => log::warn!("ignoring non-numeric WORDSPARK_MAX_TURNS: {turns}"),
        }
    }

    Ok(settings)
}
