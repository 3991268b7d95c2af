use std::sync::Arc;

use record::{Color, ColorMode, Detail, Gate, Level};

use super::{DEFAULT_DEBUG_LEVEL, DEFAULT_VERBOSITY_LEVEL, Logger};
use crate::sink::{MemorySink, Sink};

fn captured() -> (Logger, Arc<MemorySink>) {
    let capture = Arc::new(MemorySink::new());
    (Logger::with_sink(capture.clone()), capture)
}

#[test]
fn fresh_loggers_start_with_the_documented_defaults() {
    let (logger, _capture) = captured();

    assert_eq!(logger.name(), "testrig");
    assert_eq!(logger.verbosity_level(), DEFAULT_VERBOSITY_LEVEL);
    assert_eq!(logger.debug_level(), DEFAULT_DEBUG_LEVEL);
    assert_eq!(logger.shift(), 0);
    assert_eq!(logger.colors(), ColorMode::Plain);
    assert!(logger.labels().is_empty());
}

#[test]
fn injected_sinks_are_used_by_identity() {
    let sink: Arc<dyn Sink> = Arc::new(MemorySink::new());
    let logger = Logger::with_sink(sink.clone());

    assert!(Arc::ptr_eq(&sink, &logger.sink()));
    assert!(Arc::ptr_eq(&sink, &logger.descend().sink()));
}

#[test]
fn descend_adds_one_indentation_unit_per_step() {
    let (logger, capture) = captured();

    logger
        .descend()
        .descend()
        .descend()
        .info("deep message");

    assert_eq!(capture.messages(), vec!["            deep message".to_owned()]);
}

#[test]
fn descend_leaves_the_parent_untouched() {
    let (logger, _capture) = captured();
    let logger = logger.with_label("plan").with_verbosity_level(2);

    let child = logger.descend();

    assert_eq!(logger.shift(), 0);
    assert_eq!(logger.labels(), ["plan".to_owned()]);
    assert_eq!(child.shift(), 1);
    assert_eq!(child.labels(), ["plan".to_owned()]);
    assert_eq!(child.verbosity_level(), 2);
}

#[test]
fn descend_with_controls_the_extra_shift() {
    let (logger, _capture) = captured();

    assert_eq!(logger.descend_with(None, 0).shift(), 0);
    assert_eq!(logger.descend_with(None, 3).shift(), 3);
}

#[test]
fn descend_names_follow_the_hierarchy() {
    let (logger, _capture) = captured();

    assert_eq!(logger.descend().name(), "testrig.0");
    assert_eq!(logger.descend().name(), "testrig.1");
    assert_eq!(logger.descend_named("discover").name(), "testrig.discover");
    assert_eq!(
        logger.descend_named("discover").descend().name(),
        "testrig.discover.0"
    );
}

#[test]
fn children_copy_labels_at_descend_time() {
    let (logger, capture) = captured();
    let mut logger = logger.with_label("plan");

    let child = logger.descend();
    logger.add_label("late");
    child.info("from the child");

    assert_eq!(capture.messages(), vec!["    [plan] from the child".to_owned()]);
}

#[test]
fn added_labels_affect_only_subsequent_emissions() {
    let (mut logger, capture) = captured();

    logger.info("before");
    logger.add_label("foo");
    logger.info("after");

    assert_eq!(
        capture.messages(),
        vec!["before".to_owned(), "[foo] after".to_owned()]
    );
}

#[test]
fn labels_render_in_append_order() {
    let (mut logger, capture) = captured();
    logger.add_label("foo");
    logger.add_label("bar");

    logger.warn("oops");

    assert_eq!(capture.messages(), vec!["[foo] [bar] warn: oops".to_owned()]);
    assert_eq!(
        capture.records()[0].details.labels,
        vec!["foo".to_owned(), "bar".to_owned()]
    );
}

#[test]
fn warn_records_carry_key_value_and_color() {
    let (logger, capture) = captured();

    logger.warn("something failed");

    let records = capture.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Warning);
    assert_eq!(records[0].message, "warn: something failed");
    assert_eq!(records[0].details.key, "warn");
    assert_eq!(records[0].details.value.as_deref(), Some("something failed"));
    assert_eq!(records[0].details.color, Some(Color::Yellow));
    assert_eq!(records[0].details.gate, Gate::None);
}

#[test]
fn fail_records_use_the_error_level() {
    let (logger, capture) = captured();

    logger.fail("provision step exploded");

    let records = capture.records();
    assert_eq!(records[0].level, Level::Error);
    assert_eq!(records[0].message, "fail: provision step exploded");
    assert_eq!(records[0].details.key, "fail");
    assert_eq!(records[0].details.color, Some(Color::Red));
}

#[test]
fn print_records_bypass_quietness() {
    let (logger, capture) = captured();

    logger.print("always visible");
    logger.info("regular");

    let records = capture.records();
    assert_eq!(records[0].level, Level::Info);
    assert!(records[0].details.ignore_quietness);
    assert!(!records[1].details.ignore_quietness);
}

#[test]
fn verbose_gates_snapshot_the_logger_level() {
    let (logger, capture) = captured();
    let logger = logger.with_verbosity_level(2);

    logger.verbose("level one");
    logger.verbose_at(3, "level three");

    let records = capture.records();
    assert_eq!(
        records[0].details.gate,
        Gate::Verbosity {
            logger_level: 2,
            message_level: 1,
        }
    );
    assert_eq!(
        records[1].details.gate,
        Gate::Verbosity {
            logger_level: 2,
            message_level: 3,
        }
    );
    assert_eq!(records[0].level, Level::Info);
}

#[test]
fn debug_gates_snapshot_the_logger_level() {
    let (logger, capture) = captured();
    let logger = logger.with_debug_level(1);

    logger.debug("level one");
    logger.debug_at(4, Detail::new("deep").with_value("state"));

    let records = capture.records();
    assert_eq!(records[0].level, Level::Debug);
    assert_eq!(
        records[0].details.gate,
        Gate::Debug {
            logger_level: 1,
            message_level: 1,
        }
    );
    assert_eq!(
        records[1].details.gate,
        Gate::Debug {
            logger_level: 1,
            message_level: 4,
        }
    );
    assert_eq!(records[1].message, "deep: state");
}

#[test]
fn detail_builders_render_key_value_and_shift() {
    let (logger, capture) = captured();

    logger.info(
        Detail::new("environment")
            .with_value("PATH=/usr/bin\nLANG=C")
            .with_shift(1),
    );

    assert_eq!(
        capture.messages(),
        vec!["    environment:\n        PATH=/usr/bin\n        LANG=C".to_owned()]
    );
}

#[test]
fn clone_shares_the_sink_but_not_the_settings() {
    let (logger, capture) = captured();
    let mut sibling = logger.clone();

    sibling.add_label("sibling");
    sibling.info("labelled");
    logger.info("plain");

    assert!(Arc::ptr_eq(&logger.sink(), &sibling.sink()));
    assert_eq!(
        capture.messages(),
        vec!["[sibling] labelled".to_owned(), "plain".to_owned()]
    );
    assert!(logger.labels().is_empty());
}

#[test]
fn zero_and_missing_counts_keep_current_thresholds() {
    let (logger, _capture) = captured();
    let mut logger = logger.with_verbosity_level(2).with_debug_level(1);

    logger
        .apply_verbosity_options(&crate::VerbosityOptions {
            verbose: Some(0),
            debug: None,
            quiet: false,
        })
        .unwrap();

    assert_eq!(logger.verbosity_level(), 2);
    assert_eq!(logger.debug_level(), 1);
}

#[test]
fn positive_counts_override_thresholds() {
    let (logger, _capture) = captured();
    let mut logger = logger.with_verbosity_level(1);

    logger
        .apply_verbosity_options(&crate::VerbosityOptions {
            verbose: Some(3),
            debug: Some(2),
            quiet: false,
        })
        .unwrap();

    assert_eq!(logger.verbosity_level(), 3);
    assert_eq!(logger.debug_level(), 2);
}

#[test]
fn ansi_mode_styles_labels_and_markers() {
    let (logger, capture) = captured();
    let logger = logger.with_colors(ColorMode::Ansi).with_label("foo");

    logger.warn("oops");

    assert_eq!(
        capture.messages(),
        vec![
            "\u{1b}[36m[foo]\u{1b}[0m \u{1b}[33mwarn\u{1b}[0m: oops".to_owned()
        ]
    );
}
