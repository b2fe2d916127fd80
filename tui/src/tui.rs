use crossterm::{
    cursor,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, ClearType},
};
use futures_executor::block_on;
use futures_util::StreamExt;
use log::debug;
use sparselife_lib::{render_with, Glyphs, Trace};
use std::io::{self, Stdout, Write};

struct TraceWindow<'a> {
    trace: &'a Trace,
    glyphs: Glyphs,
    gen: usize,
    stdout: Stdout,
}

impl<'a> TraceWindow<'a> {
    fn new(trace: &'a Trace, glyphs: Glyphs) -> Self {
        TraceWindow {
            trace,
            glyphs,
            gen: 0,
            stdout: io::stdout(),
        }
    }

    fn last_gen(&self) -> usize {
        self.trace.len() - 1
    }

    fn update(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let generation = &self.trace[self.gen];
        let top_bar = format!(
            "Gen: {}/{}  Cells: {}  Box: {}",
            self.gen,
            self.last_gen(),
            generation.len(),
            generation.bounding_box()
        );
        let bottom_bar = "[←/→] Step  [Home/End] First/last  [q] Quit";

        queue!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            SetAttribute(Attribute::Reverse),
            Print(clip(&top_bar, width)),
            SetAttribute(Attribute::Reset),
        )?;
        let world = render_with(generation, self.glyphs);
        for (row, line) in world.lines().take(height.saturating_sub(2) as usize).enumerate() {
            queue!(
                self.stdout,
                cursor::MoveTo(0, row as u16 + 1),
                Print(clip(line, width))
            )?;
        }
        queue!(
            self.stdout,
            cursor::MoveTo(0, height.saturating_sub(1)),
            SetAttribute(Attribute::Reverse),
            Print(clip(bottom_bar, width)),
            SetAttribute(Attribute::Reset),
        )?;
        self.stdout.flush()
    }

    /// Handles a key press. Returns `false` when the viewer should quit.
    fn key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return false,
            KeyCode::Right | KeyCode::PageDown | KeyCode::Char(' ') => {
                self.gen = (self.gen + 1).min(self.last_gen())
            }
            KeyCode::Left | KeyCode::PageUp => self.gen = self.gen.saturating_sub(1),
            KeyCode::Home => self.gen = 0,
            KeyCode::End => self.gen = self.last_gen(),
            _ => (),
        }
        true
    }

    async fn main_loop(&mut self) -> io::Result<()> {
        let mut reader = EventStream::new();
        self.update()?;
        while let Some(event) = reader.next().await {
            match event? {
                Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind: KeyEventKind::Press,
                    ..
                }) => {
                    if !self.key(code, modifiers) {
                        break;
                    }
                    self.update()?;
                }
                Event::Resize(..) => self.update()?,
                _ => (),
            }
        }
        Ok(())
    }
}

fn clip(line: &str, width: u16) -> String {
    line.chars().take(width as usize).collect()
}

/// Browses `trace` interactively.
///
/// Returns the index of the generation on screen when the viewer is closed.
pub(crate) fn view_trace(trace: &Trace, glyphs: Glyphs) -> io::Result<usize> {
    let mut window = TraceWindow::new(trace, glyphs);

    terminal::enable_raw_mode()?;
    execute!(window.stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
    let result = block_on(window.main_loop());
    execute!(window.stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    debug!("viewer closed at generation {}", window.gen);
    result.map(|()| window.gen)
}
