//! Touch scripts: a line-oriented recording of touch events that can be
//! replayed through a [`KeyboardSession`].
//!
//! ```text
//! # type "hi", then Enter
//! rect 0 0 900 900
//! tap 400 100 400 50
//! down 0 50 400 1000
//! up 0 50 400 1050
//! tap 400 400 400 100
//! ```

use crate::input::{
    DispatchOutcome, KeyAction, KeyboardSession, ListenerEvent, PointerId, RecordingListener,
    TouchEvent, TouchPhase,
};
use crate::layout::Mode;
use log::{debug, info};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while reading a touch script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
}

/// One parsed script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    /// New on-screen bounds for the keyboard
    Rect {
        left: i32,
        top: i32,
        width: i32,
        height: i32,
    },
    /// A raw touch event
    Touch(TouchEvent),
    /// Down at `from`, up at `to`, on pointer 0 with generated timestamps
    Tap { from: (i32, i32), to: (i32, i32) },
}

/// Result of replaying a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    /// One line per outbound text commit, key event, or mode change
    pub transcript: Vec<String>,
    /// All committed text, concatenated
    pub committed: String,
    pub final_mode: Mode,
}

/// Parses a whole script. Blank lines and `#` comments are skipped.
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let command = parse_line(line).map_err(|message| ScriptError::Parse {
            line: index + 1,
            message,
        })?;
        commands.push(command);
    }
    Ok(commands)
}

/// Reads and parses a script from a file, or from stdin when `path` is `-`.
pub fn read_script(path: &Path) -> Result<Vec<ScriptCommand>, ScriptError> {
    let source = if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        source
    } else {
        std::fs::read_to_string(path)?
    };
    parse_script(&source)
}

fn parse_line(line: &str) -> Result<ScriptCommand, String> {
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let command = match verb {
        "rect" => {
            expect_args(verb, &args, 4)?;
            ScriptCommand::Rect {
                left: number(&args, 0, "left")?,
                top: number(&args, 1, "top")?,
                width: number(&args, 2, "width")?,
                height: number(&args, 3, "height")?,
            }
        }
        "down" | "move" | "up" => {
            expect_args(verb, &args, 4)?;
            let phase = match verb {
                "down" => TouchPhase::Down,
                "move" => TouchPhase::Move,
                _ => TouchPhase::Up,
            };
            ScriptCommand::Touch(TouchEvent::new(
                number::<PointerId>(&args, 0, "pointer")?,
                phase,
                number(&args, 1, "x")?,
                number(&args, 2, "y")?,
                number(&args, 3, "time")?,
            ))
        }
        "cancel" => {
            expect_args(verb, &args, 2)?;
            ScriptCommand::Touch(TouchEvent::new(
                number(&args, 0, "pointer")?,
                TouchPhase::Cancel,
                0,
                0,
                number(&args, 1, "time")?,
            ))
        }
        "tap" => {
            expect_args(verb, &args, 4)?;
            ScriptCommand::Tap {
                from: (number(&args, 0, "x1")?, number(&args, 1, "y1")?),
                to: (number(&args, 2, "x2")?, number(&args, 3, "y2")?),
            }
        }
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(command)
}

fn expect_args(verb: &str, args: &[&str], count: usize) -> Result<(), String> {
    if args.len() == count {
        Ok(())
    } else {
        Err(format!("'{verb}' takes {count} arguments, got {}", args.len()))
    }
}

fn number<T: FromStr>(args: &[&str], index: usize, name: &str) -> Result<T, String> {
    let raw = args[index];
    raw.parse().map_err(|_| format!("invalid {name} '{raw}'"))
}

/// Replays `commands` through `session` and summarizes what the host received.
///
/// Tap timestamps continue from the latest explicit event time, spaced past
/// the session's noise window so consecutive taps are never filtered.
pub fn run_script(
    session: &mut KeyboardSession<RecordingListener>,
    commands: &[ScriptCommand],
) -> ReplayReport {
    let mut transcript = Vec::new();
    let mut clock = 0u64;

    for command in commands {
        let seen = session.listener().events().len();
        let outcome = match *command {
            ScriptCommand::Rect {
                left,
                top,
                width,
                height,
            } => {
                session.draw_rect_update(left, top, width, height);
                DispatchOutcome::Nothing
            }
            ScriptCommand::Touch(event) => {
                clock = clock.max(event.event_time);
                session.touch_event(event)
            }
            ScriptCommand::Tap { from, to } => {
                let down = clock + session.noise_threshold().time_ms + 1;
                let up = down + 1;
                clock = up;
                session.on_down(0, from.0, from.1, down);
                session.on_up(0, to.0, to.1, up)
            }
        };

        for event in &session.listener().events()[seen..] {
            match event {
                ListenerEvent::CommitText(text) => transcript.push(format!("text {text:?}")),
                ListenerEvent::KeyEvent {
                    key_code,
                    meta,
                    action,
                } => {
                    let action = match action {
                        KeyAction::Down => "down",
                        KeyAction::Up => "up",
                    };
                    transcript.push(format!("key {key_code} {meta} {action}"));
                }
                _ => {}
            }
        }
        if let DispatchOutcome::ModeChanged { from, to } = outcome {
            transcript.push(format!("mode {from} -> {to}"));
        }
        debug!("{command:?} -> {outcome:?}");
    }

    let report = ReplayReport {
        transcript,
        committed: session.listener().committed_text(),
        final_mode: session.mode(),
    };
    info!(
        "Replayed {} commands: {} outputs, final mode {}",
        commands.len(),
        report.transcript.len(),
        report.final_mode
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::SessionSettings;

    fn session() -> KeyboardSession<RecordingListener> {
        KeyboardSession::new(RecordingListener::new(), SessionSettings::default())
    }

    #[test]
    fn test_parses_every_command_kind() {
        let script = "\
            # header comment\n\
            rect 0 0 900 900\n\
            \n\
            down 1 10 20 100   # trailing comment\n\
            move 1 15 25 110\n\
            up 1 15 25 120\n\
            cancel 1 130\n\
            tap 400 400 400 100\n";
        let commands = parse_script(script).unwrap();

        assert_eq!(
            commands,
            vec![
                ScriptCommand::Rect {
                    left: 0,
                    top: 0,
                    width: 900,
                    height: 900
                },
                ScriptCommand::Touch(TouchEvent::new(1, TouchPhase::Down, 10, 20, 100)),
                ScriptCommand::Touch(TouchEvent::new(1, TouchPhase::Move, 15, 25, 110)),
                ScriptCommand::Touch(TouchEvent::new(1, TouchPhase::Up, 15, 25, 120)),
                ScriptCommand::Touch(TouchEvent::new(1, TouchPhase::Cancel, 0, 0, 130)),
                ScriptCommand::Tap {
                    from: (400, 400),
                    to: (400, 100)
                },
            ]
        );
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        let err = parse_script("rect 0 0 900 900\n\ndown 0 ten 20 100\n").unwrap_err();
        match err {
            ScriptError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert_eq!(message, "invalid x 'ten'");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_verbs_and_arity() {
        let err = parse_script("swipe 1 2").unwrap_err();
        assert_eq!(err.to_string(), "line 1: unknown command 'swipe'");

        let err = parse_script("tap 1 2 3").unwrap_err();
        assert_eq!(err.to_string(), "line 1: 'tap' takes 4 arguments, got 3");

        assert!(parse_script("up -1 0 0 0").is_err());
    }

    #[test]
    fn test_replay_types_a_word_and_presses_enter() {
        let commands = parse_script(
            "rect 0 0 900 900\n\
             tap 400 100 400 50\n\
             down 0 50 400 1000\n\
             up 0 50 400 1050\n\
             tap 400 400 400 100\n",
        )
        .unwrap();
        let mut session = session();
        let report = run_script(&mut session, &commands);

        assert_eq!(report.committed, "hi");
        assert_eq!(
            report.transcript,
            vec![
                "text \"h\"",
                "text \"i\"",
                "key 66 0x0000 down",
                "key 66 0x0000 up",
            ]
        );
        assert_eq!(report.final_mode, Mode::Letters);
    }

    #[test]
    fn test_replay_records_mode_changes() {
        let commands = parse_script(
            "rect 0 0 900 900\n\
             tap 400 400 800 400\n\
             tap 50 50 50 50\n",
        )
        .unwrap();
        let mut session = session();
        let report = run_script(&mut session, &commands);

        assert_eq!(
            report.transcript,
            vec!["mode letters -> capitalized-once", "text \"T\"",]
        );
        assert_eq!(report.final_mode, Mode::Letters);
    }

    #[test]
    fn test_consecutive_taps_clear_the_noise_window() {
        let commands = parse_script(
            "rect 0 0 900 900\n\
             tap 50 50 50 50\n\
             tap 50 50 50 50\n\
             tap 50 50 50 50\n",
        )
        .unwrap();
        let mut session = session();
        assert_eq!(run_script(&mut session, &commands).committed, "ttt");
    }

    #[test]
    fn test_read_script_from_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "rect 0 0 300 300\ntap 10 10 10 10\n").unwrap();
        let commands = read_script(temp.path()).unwrap();
        assert_eq!(commands.len(), 2);

        let missing = read_script(Path::new("/nonexistent/quadboard.script")).unwrap_err();
        assert!(matches!(missing, ScriptError::Io(_)));
    }

    #[test]
    fn test_replay_without_rect_emits_nothing() {
        let commands = parse_script("tap 400 400 400 400\n").unwrap();
        let mut session = session();
        let report = run_script(&mut session, &commands);
        assert!(report.transcript.is_empty());
        assert!(report.committed.is_empty());
    }
}
