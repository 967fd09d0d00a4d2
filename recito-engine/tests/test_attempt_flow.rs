//! End-to-end attempt flows over built-in catalog content

use recito_engine::{Engine, EngineConfig, EngineError, ProviderError, SessionState};
use recito_scenarios::catalog;

fn spanish_intro() -> &'static str {
    catalog()
        .find("introduction")
        .unwrap()
        .paragraph("es-ES")
        .unwrap()
}

#[test]
fn test_clean_reading_completes_the_paragraph() {
    let mut engine = Engine::new(EngineConfig::default()).unwrap();
    let id = engine.start_attempt(spanish_intro(), "es-ES").unwrap();

    // One utterance per event, the way a provider finalizes phrases.
    let utterances = [
        "hola me llamo maria",
        "tengo veinticinco años",
        "soy de españa",
        "me gusta leer libros y viajar",
    ];

    let mut last_percentage = 0;
    for utterance in utterances {
        let summary = engine.on_transcript(id, utterance).unwrap();
        assert!(summary.percentage >= last_percentage);
        last_percentage = summary.percentage;
    }

    let report = engine.get_progress(id).unwrap();
    assert_eq!(report.percentage, 100);
    assert_eq!(report.completed_count, report.total_count);
    assert_eq!(report.cursor, report.total_count);
    assert!(report.per_word_scores.iter().all(|s| s.is_some()));
}

#[test]
fn test_noisy_reading_still_makes_progress() {
    let mut engine = Engine::new(EngineConfig::default()).unwrap();
    let id = engine.start_attempt(spanish_intro(), "es-ES").unwrap();

    // Dropped consonants and recognizer noise; close words still confirm.
    engine.on_transcript(id, "ola me yamo maria").unwrap();
    let summary = engine.on_transcript(id, "tengo beinticinco anos").unwrap();

    assert!(summary.completed_count >= 6);
    assert!(summary.percentage < 100);
}

#[test]
fn test_progress_is_monotonic_under_garbage_input() {
    let mut engine = Engine::new(EngineConfig::default()).unwrap();
    let id = engine.start_attempt(spanish_intro(), "es-ES").unwrap();

    engine.on_transcript(id, "hola me llamo maria").unwrap();
    let before = engine.get_progress(id).unwrap();

    for garbage in ["zzz qqq", "!!!", "", "완전히 다른 문자"] {
        let summary = engine.on_transcript(id, garbage).unwrap();
        assert_eq!(summary.completed_count, before.completed_count);
        assert_eq!(summary.cursor, before.cursor);
    }
}

#[test]
fn test_out_of_order_fragments_tolerated() {
    let mut engine = Engine::new(EngineConfig::default()).unwrap();
    let id = engine.start_attempt("the man", "en-US").unwrap();

    // The recognizer caught the later word first.
    let summary = engine.on_transcript(id, "man").unwrap();
    assert_eq!(summary.completed_count, 1);
    assert_eq!(summary.cursor, 0);

    // A later event re-delivers the phrase; the gap fills in order.
    let summary = engine.on_transcript(id, "the man").unwrap();
    assert_eq!(summary.completed_count, 2);
    assert_eq!(summary.percentage, 100);
}

#[test]
fn test_stop_retains_progress_and_blocks_consumption() {
    let mut engine = Engine::new(EngineConfig::default()).unwrap();
    let id = engine.start_attempt(spanish_intro(), "es-ES").unwrap();

    engine.on_transcript(id, "hola me llamo maria").unwrap();
    engine.end_attempt(id).unwrap();
    assert_eq!(*engine.session_state(id).unwrap(), SessionState::Stopped);

    let frozen = engine.get_progress(id).unwrap();
    engine.on_transcript(id, "tengo veinticinco años").unwrap();
    assert_eq!(engine.get_progress(id).unwrap(), frozen);
}

#[test]
fn test_reset_then_resume_starts_from_zero() {
    let mut engine = Engine::new(EngineConfig::default()).unwrap();
    let id = engine.start_attempt(spanish_intro(), "es-ES").unwrap();

    engine.on_transcript(id, "hola me llamo maria").unwrap();
    assert!(engine.get_progress(id).unwrap().completed_count > 0);

    engine.reset_attempt(id).unwrap();
    assert_eq!(*engine.session_state(id).unwrap(), SessionState::Idle);
    assert_eq!(engine.get_progress(id).unwrap().completed_count, 0);

    engine.resume_attempt(id).unwrap();
    assert_eq!(*engine.session_state(id).unwrap(), SessionState::Listening);
    let summary = engine.on_transcript(id, "hola").unwrap();
    assert_eq!(summary.completed_count, 1);
}

#[test]
fn test_provider_failure_keeps_partial_progress_visible() {
    let mut engine = Engine::new(EngineConfig::default()).unwrap();
    let id = engine.start_attempt(spanish_intro(), "es-ES").unwrap();

    engine.on_transcript(id, "hola me").unwrap();
    engine
        .report_provider_error(id, ProviderError::NoSpeech)
        .unwrap();

    assert_eq!(
        *engine.session_state(id).unwrap(),
        SessionState::Errored {
            reason: ProviderError::NoSpeech
        }
    );
    assert_eq!(engine.get_progress(id).unwrap().completed_count, 2);
}

#[test]
fn test_each_catalog_paragraph_is_a_valid_target() {
    let mut engine = Engine::new(EngineConfig::default()).unwrap();
    for scenario in catalog().scenarios() {
        for lang in catalog().languages() {
            let paragraph = scenario.paragraph(&lang.code).unwrap();
            let id = engine.start_attempt(paragraph, &lang.code).unwrap();
            let report = engine.get_progress(id).unwrap();
            assert!(report.total_count >= 4, "{}/{}", scenario.id, lang.code);
            assert_eq!(report.percentage, 0);
        }
    }
}

#[test]
fn test_unknown_handle_surfaces_invalid_attempt() {
    let mut engine = Engine::new(EngineConfig::default()).unwrap();
    let id = engine.start_attempt("hola", "es-ES").unwrap();
    engine.end_attempt(id).unwrap();

    // A handle from a different engine instance is unknown here.
    let mut other = Engine::new(EngineConfig::default()).unwrap();
    let _ = other.start_attempt("bonjour", "fr-FR").unwrap();
    let foreign = other.start_attempt("merci bien", "fr-FR").unwrap();

    assert!(matches!(
        engine.get_progress(foreign),
        Err(EngineError::InvalidAttempt(_))
    ));
}
