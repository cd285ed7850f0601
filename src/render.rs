use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use maze_runner::{Cell, Pos, Session};

const CELL_W: usize = 2;

#[derive(Clone, Copy, PartialEq)]
enum Glyph {
    Player,
    Goal,
    Wall,
    Path,
}

impl Glyph {
    fn text(self) -> &'static str {
        match self {
            Glyph::Player => "●",
            Glyph::Goal => "⚑",
            Glyph::Wall => "██",
            Glyph::Path => "  ",
        }
    }

    fn color(self) -> Color {
        match self {
            Glyph::Player => Color::Red,
            Glyph::Goal => Color::Green,
            Glyph::Wall => Color::DarkGrey,
            Glyph::Path => Color::Reset,
        }
    }
}

/// Redraws only the cells that changed since the previous frame.
pub struct Renderer {
    last: Vec<Glyph>,
    last_hud: String,
    last_status: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            last: vec![Glyph::Path; width * height],
            last_hud: String::new(),
            last_status: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }

    pub fn invalidate(&mut self) {
        self.needs_full = true;
    }

    pub fn draw(&mut self, stdout: &mut Stdout, session: &Session, status: &str) -> io::Result<()> {
        let needed_w = u16::try_from(session.width() * CELL_W).unwrap_or(u16::MAX);
        let needed_h = u16::try_from(session.height() + 2).unwrap_or(u16::MAX);

        let (term_w, term_h) = terminal::size()?;
        if term_w < needed_w || term_h < needed_h {
            stdout.queue(Clear(ClearType::All))?;
            stdout.queue(MoveTo(0, 0))?;
            stdout.queue(Print(format!(
                "Terminal too small. Need at least {needed_w}x{needed_h} (cols x rows). Current: {term_w}x{term_h}."
            )))?;
            stdout.flush()?;
            self.needs_full = true;
            return Ok(());
        }

        let origin_x = (term_w - needed_w) / 2;
        let origin_y = (term_h - needed_h) / 2 + 1;
        if origin_x != self.origin_x || origin_y != self.origin_y {
            self.origin_x = origin_x;
            self.origin_y = origin_y;
            self.needs_full = true;
        }
        if self.needs_full {
            stdout.queue(Clear(ClearType::All))?;
        }

        let mut hud = format!(
            "Difficulty: {}  (arrows/hjkl move, d difficulty, r restart, q quit)",
            session.difficulty()
        );
        if session.is_fallback() {
            hud.push_str("  [open maze]");
        }
        if self.needs_full || hud != self.last_hud {
            self.print_line(stdout, self.origin_y - 1, &hud, Color::White)?;
            self.last_hud = hud;
        }

        let grid = session.grid();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let glyph = glyph_for(session, Pos::new(x, y));
                let idx = y * grid.width() + x;
                if self.needs_full || glyph != self.last[idx] {
                    self.last[idx] = glyph;
                    self.draw_cell(stdout, x, y, glyph)?;
                }
            }
        }

        if self.needs_full || status != self.last_status {
            let row = self.origin_y + grid.height() as u16;
            self.print_line(stdout, row, status, Color::Yellow)?;
            self.last_status = status.to_string();
        }
        self.needs_full = false;

        stdout.flush()
    }

    fn print_line(&self, stdout: &mut Stdout, row: u16, text: &str, color: Color) -> io::Result<()> {
        stdout.queue(MoveTo(self.origin_x, row))?;
        stdout.queue(Clear(ClearType::CurrentLine))?;
        stdout.queue(SetForegroundColor(color))?;
        stdout.queue(Print(text))?;
        stdout.queue(ResetColor)?;
        Ok(())
    }

    fn draw_cell(&self, stdout: &mut Stdout, x: usize, y: usize, glyph: Glyph) -> io::Result<()> {
        let text = glyph.text();
        let x_pos = self.origin_x + (x * CELL_W) as u16;
        let y_pos = self.origin_y + y as u16;
        stdout.queue(MoveTo(x_pos, y_pos))?;
        stdout.queue(SetForegroundColor(glyph.color()))?;
        stdout.queue(Print(text))?;
        let w = UnicodeWidthStr::width(text);
        for _ in w..CELL_W {
            stdout.queue(Print(' '))?;
        }
        stdout.queue(ResetColor)?;
        Ok(())
    }
}

fn glyph_for(session: &Session, pos: Pos) -> Glyph {
    if pos == session.player() {
        return Glyph::Player;
    }
    if pos == session.goal() {
        return Glyph::Goal;
    }
    match session.grid().cell(pos) {
        Some(Cell::Wall) => Glyph::Wall,
        _ => Glyph::Path,
    }
}
