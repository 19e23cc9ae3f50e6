//! Touch scripts: recorded gestures and panel edits replayed against a canvas.
//!
//! A script is plain text with one command per line. Blank lines and text
//! after `#` are ignored.
//!
//! ```text
//! down 10 10        # touch began
//! move 10 50        # touch moved
//! up 10 50          # touch ended (merges the stroke)
//! tap 40 40         # down + up at one point
//! color red         # toolbar palette color (or its button index, 0-7)
//! erase             # toggle the eraser
//! panel opacity 0.5 # settings panel slider (red, green, blue, opacity, size)
//! panel-cancel      # close the open panel without applying it
//! commit            # merge the stroke layer (e.g. after an import)
//! reset             # clear the canvas
//! ```
//!
//! Consecutive `panel` lines edit one panel session, which is dismissed (and
//! its draft applied) at the next non-panel command or at the end of the script.

use crate::config::PanelLayout;
use crate::draw::{BrushState, PaletteColor, StrokePoint};
use crate::input::{StrokeCompositor, TouchEvent};
use crate::panel::{BrushSettingsPanel, Channel};
use log::{debug, warn};
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;

/// A settings panel slider edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelEdit {
    Channel(Channel, f64),
    Size(f64),
}

/// One parsed script line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptCommand {
    Touch(TouchEvent),
    Tap(StrokePoint),
    Commit,
    Reset,
    ToggleEraser,
    Color(PaletteColor),
    Panel(PanelEdit),
    PanelCancel,
}

/// Errors raised while parsing a script. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    WrongArguments {
        line: usize,
        command: String,
        expected: &'static str,
    },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: unknown color '{name}'")]
    UnknownColor { line: usize, name: String },

    #[error("line {line}: unknown panel control '{name}'")]
    UnknownControl { line: usize, name: String },
}

/// Parses a whole script.
pub fn parse_script(text: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        commands.push(parse_line(index + 1, content)?);
    }
    Ok(commands)
}

fn parse_line(line: usize, content: &str) -> Result<ScriptCommand, ScriptError> {
    let mut parts = content.split_whitespace();
    let command = parts.next().unwrap_or_default().to_lowercase();
    let args: Vec<&str> = parts.collect();

    let wrong = |expected: &'static str| ScriptError::WrongArguments {
        line,
        command: command.clone(),
        expected,
    };

    match command.as_str() {
        "down" | "move" | "up" | "tap" => {
            let [x, y] = args.as_slice() else {
                return Err(wrong("two coordinates"));
            };
            let (x, y) = (parse_number(line, x)?, parse_number(line, y)?);
            Ok(match command.as_str() {
                "down" => ScriptCommand::Touch(TouchEvent::began(x, y)),
                "move" => ScriptCommand::Touch(TouchEvent::moved(x, y)),
                "up" => ScriptCommand::Touch(TouchEvent::ended(x, y)),
                _ => ScriptCommand::Tap(StrokePoint::new(x, y)),
            })
        }
        "commit" | "reset" | "erase" | "panel-cancel" => {
            if !args.is_empty() {
                return Err(wrong("no arguments"));
            }
            Ok(match command.as_str() {
                "commit" => ScriptCommand::Commit,
                "reset" => ScriptCommand::Reset,
                "erase" => ScriptCommand::ToggleEraser,
                _ => ScriptCommand::PanelCancel,
            })
        }
        "color" => {
            let [name] = args.as_slice() else {
                return Err(wrong("a color name"));
            };
            if let Ok(index) = name.parse::<usize>() {
                return Ok(ScriptCommand::Color(PaletteColor::from_index(index)));
            }
            name.parse::<PaletteColor>()
                .map(ScriptCommand::Color)
                .map_err(|_| ScriptError::UnknownColor {
                    line,
                    name: name.to_string(),
                })
        }
        "panel" => {
            let [control, value] = args.as_slice() else {
                return Err(wrong("a control and a value"));
            };
            let value = parse_number(line, value)?;
            let edit = match control.to_lowercase().as_str() {
                "red" => PanelEdit::Channel(Channel::Red, value),
                "green" => PanelEdit::Channel(Channel::Green, value),
                "blue" => PanelEdit::Channel(Channel::Blue, value),
                "opacity" => PanelEdit::Channel(Channel::Opacity, value),
                "size" => PanelEdit::Size(value),
                _ => {
                    return Err(ScriptError::UnknownControl {
                        line,
                        name: control.to_string(),
                    });
                }
            };
            Ok(ScriptCommand::Panel(edit))
        }
        _ => Err(ScriptError::UnknownCommand { line, command }),
    }
}

fn parse_number(line: usize, value: &str) -> Result<f64, ScriptError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ScriptError::InvalidNumber {
            line,
            value: value.to_string(),
        })
}

/// Counters reported after a replay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStats {
    /// Gestures merged into the canvas
    pub strokes: usize,
    /// Segments drawn across all gestures
    pub segments: usize,
    /// Panel sessions whose draft was applied
    pub panel_sessions: usize,
}

/// Replays commands against a canvas, hosting the settings panel the way a UI would.
pub struct ScriptRunner<'a> {
    canvas: &'a mut StrokeCompositor,
    layout: PanelLayout,
    panel: Option<BrushSettingsPanel>,
    completed: Rc<Cell<Option<BrushState>>>,
    stats: ReplayStats,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(canvas: &'a mut StrokeCompositor, layout: PanelLayout) -> Self {
        Self {
            canvas,
            layout,
            panel: None,
            completed: Rc::new(Cell::new(None)),
            stats: ReplayStats::default(),
        }
    }

    /// Runs every command in order and closes a panel left open at the end.
    pub fn run(mut self, commands: &[ScriptCommand]) -> ReplayStats {
        for command in commands {
            self.execute(*command);
        }
        self.dismiss_panel();
        self.stats
    }

    fn execute(&mut self, command: ScriptCommand) {
        match command {
            ScriptCommand::Panel(edit) => {
                self.edit_panel(edit);
                return;
            }
            ScriptCommand::PanelCancel => {
                match self.panel.take() {
                    Some(panel) => panel.cancel(),
                    None => warn!("panel-cancel without an open settings panel"),
                }
                return;
            }
            _ => self.dismiss_panel(),
        }

        match command {
            ScriptCommand::Touch(event) => {
                if let Some(summary) = self.canvas.handle_touch(event) {
                    self.record(summary.segments);
                }
            }
            ScriptCommand::Tap(point) => {
                self.canvas.touch_began(point);
                if let Some(summary) = self.canvas.touch_ended(point) {
                    self.record(summary.segments);
                }
            }
            ScriptCommand::Commit => self.canvas.commit(),
            ScriptCommand::Reset => self.canvas.reset(),
            ScriptCommand::ToggleEraser => {
                self.canvas.toggle_eraser();
            }
            ScriptCommand::Color(color) => self.canvas.select_palette_color(color),
            ScriptCommand::Panel(_) | ScriptCommand::PanelCancel => {}
        }
    }

    fn record(&mut self, segments: usize) {
        self.stats.strokes += 1;
        self.stats.segments += segments;
    }

    fn edit_panel(&mut self, edit: PanelEdit) {
        let panel = self.panel.get_or_insert_with(|| {
            debug!("Opening settings panel");
            let sink = Rc::clone(&self.completed);
            BrushSettingsPanel::new(self.canvas.settings_snapshot(), self.layout)
                .on_complete(move |brush| sink.set(Some(brush)))
        });
        match edit {
            PanelEdit::Channel(channel, value) => panel.on_channel_changed(channel, value),
            PanelEdit::Size(value) => panel.on_diameter_changed(value),
        }
    }

    fn dismiss_panel(&mut self) {
        let Some(panel) = self.panel.take() else {
            return;
        };
        panel.on_dismiss();
        if let Some(brush) = self.completed.take() {
            self.canvas.apply_brush(brush);
            self.stats.panel_sessions += 1;
        }
    }
}
