//! Interactive front-end state: the masked entry buffer and the current
//! result pane.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::evaluator::{AnalysisError, Estimator};
use crate::presenter::{PanelView, refresh};

pub struct App<E> {
    estimator: E,
    entry: String,
    /// Cursor position in characters.
    cursor: usize,
    view: PanelView,
    /// Whether the terminal reports key releases; otherwise presses trigger
    /// the analysis.
    reports_release: bool,
    should_quit: bool,
}

impl<E: Estimator> App<E> {
    pub fn new(estimator: E, reports_release: bool) -> Self {
        Self {
            estimator,
            entry: String::new(),
            cursor: 0,
            view: PanelView::placeholder(),
            reports_release,
            should_quit: false,
        }
    }

    pub fn view(&self) -> &PanelView {
        &self.view
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// One `*` per entered character.
    pub fn masked_entry(&self) -> String {
        "*".repeat(self.entry.chars().count())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key event, re-running the analysis on every keystroke.
    ///
    /// # Errors
    /// Propagates estimator failures; empty input never reaches the estimator.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), AnalysisError> {
        match key.kind {
            KeyEventKind::Release => {
                // Enter already analyzed on press.
                if self.reports_release && key.code != KeyCode::Enter {
                    self.analyze()?;
                }
            }
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if self.handle_press(key) {
                    return Ok(());
                }
                if !self.reports_release || key.code == KeyCode::Enter {
                    self.analyze()?;
                }
            }
        }
        Ok(())
    }

    /// Applies an edit. Returns `true` when the key asked to quit.
    fn handle_press(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
            KeyCode::Char(c) => {
                let at = self.byte_index();
                self.entry.insert(at, c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index();
                    self.entry.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.entry.chars().count() {
                    let at = self.byte_index();
                    self.entry.remove(at);
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.entry.chars().count());
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.entry.chars().count(),
            _ => {}
        }
        self.should_quit
    }

    fn byte_index(&self) -> usize {
        self.entry
            .char_indices()
            .nth(self.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.entry.len())
    }

    fn analyze(&mut self) -> Result<(), AnalysisError> {
        self.view = refresh(&self.estimator, &self.entry)?;
        #[cfg(feature = "tracing")]
        tracing::debug!("result pane refreshed, progress {}", self.view.progress.value);
        Ok(())
    }
}
