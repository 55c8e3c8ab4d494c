/// Scoreboard table rendering
///
/// Rows are laid out in a ratatui [`Buffer`] first, then written out as
/// plain or ANSI-styled text. Keeping the buffer step makes the layout and
/// styling testable cell by cell.
use std::borrow::Cow;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::Config;
use crate::formatting::BoxChars;
use crate::transform::GameRow;

/// Column headers, in display order
pub const HEADERS: [&str; 4] = ["Time/Status", "Away Team", "Score", "Home Team"];

/// Horizontal padding on each side of a cell
const CELL_PADDING: u16 = 2;

/// Border rows: top, under-header, bottom
const BORDER_ROWS: u16 = 3;

/// Widest a cell's text may be before it is truncated
const MAX_CELL_WIDTH: u16 = 48;

/// Data rows that fit below the header in a `u16`-high buffer
const MAX_ROWS: usize = (u16::MAX - BORDER_ROWS - 1) as usize;

/// Styles and border characters for the table
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    pub box_chars: BoxChars,
    pub header: Style,
    pub row: Style,
    pub live_row: Style,
    pub border: Style,
}

impl TableStyle {
    pub fn from_config(config: &Config) -> Self {
        let theme = &config.theme;
        Self {
            box_chars: BoxChars::from_use_unicode(config.use_unicode),
            header: Style::default().fg(theme.header_fg).add_modifier(Modifier::BOLD),
            row: Style::default().fg(theme.row_fg),
            live_row: Style::default().fg(theme.live_fg).bg(theme.live_bg),
            border: Style::default().fg(theme.border_fg),
        }
    }

    fn row_style(&self, row: &GameRow) -> Style {
        if row.in_progress {
            self.live_row
        } else {
            self.row
        }
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

fn cells(row: &GameRow) -> [&str; 4] {
    [&row.status, &row.away_team, &row.score, &row.home_team]
}

fn display_width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX).min(MAX_CELL_WIDTH)
}

/// Width of each column including padding, never wider than `MAX_CELL_WIDTH` plus padding
fn column_widths(rows: &[GameRow]) -> [u16; 4] {
    let mut widths = HEADERS.map(display_width);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(cells(row)) {
            *width = (*width).max(display_width(cell));
        }
    }
    widths.map(|w| w + 2 * CELL_PADDING)
}

/// Cut `text` down to `max` columns, ending with `ellipsis` when shortened
fn truncate_to_width<'a>(text: &'a str, max: u16, ellipsis: &str) -> Cow<'a, str> {
    let max = usize::from(max);
    if text.width() <= max {
        return Cow::Borrowed(text);
    }
    let budget = max.saturating_sub(ellipsis.width());
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ellipsis);
    Cow::Owned(out)
}

/// Lay the table out in a buffer sized exactly to fit it
pub fn render_buffer(rows: &[GameRow], style: &TableStyle) -> Buffer {
    let rows = &rows[..rows.len().min(MAX_ROWS)];
    let widths = column_widths(rows);
    let width = widths.iter().sum::<u16>() + widths.len() as u16 + 1;
    let height = rows.len() as u16 + BORDER_ROWS + 1;

    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    let chars = &style.box_chars;

    draw_rule(&mut buf, 0, &widths, [&chars.top_left, &chars.top_junction, &chars.top_right], style);
    draw_row(&mut buf, 1, &widths, HEADERS, style.header, style);
    draw_rule(&mut buf, 2, &widths, [&chars.left_junction, &chars.cross, &chars.right_junction], style);
    for (i, row) in rows.iter().enumerate() {
        let y = 3 + i as u16;
        draw_row(&mut buf, y, &widths, cells(row), style.row_style(row), style);
    }
    draw_rule(
        &mut buf,
        height - 1,
        &widths,
        [&chars.bottom_left, &chars.bottom_junction, &chars.bottom_right],
        style,
    );

    buf
}

/// Draw a horizontal rule; `ends` is (left, junction, right)
fn draw_rule(buf: &mut Buffer, y: u16, widths: &[u16; 4], ends: [&String; 3], style: &TableStyle) {
    let [left, junction, right] = ends;
    let mut x = 0;
    buf.set_string(x, y, left, style.border);
    x += 1;
    for (i, width) in widths.iter().enumerate() {
        buf.set_string(x, y, style.box_chars.horizontal.repeat(*width as usize), style.border);
        x += width;
        let end = if i + 1 == widths.len() { right } else { junction };
        buf.set_string(x, y, end, style.border);
        x += 1;
    }
}

/// Draw one row of cells; the whole cell (padding included) takes `cell_style`
fn draw_row(
    buf: &mut Buffer,
    y: u16,
    widths: &[u16; 4],
    cells: [&str; 4],
    cell_style: Style,
    style: &TableStyle,
) {
    let mut x = 0;
    buf.set_string(x, y, &style.box_chars.vertical, style.border);
    x += 1;
    for (width, cell) in widths.iter().zip(cells) {
        let text = truncate_to_width(cell, width - 2 * CELL_PADDING, &style.box_chars.ellipsis);
        buf.set_style(Rect::new(x, y, *width, 1), cell_style);
        buf.set_string(x + CELL_PADDING, y, text, cell_style);
        x += width;
        buf.set_string(x, y, &style.box_chars.vertical, style.border);
        x += 1;
    }
}

/// Write a buffer as lines of text, with ANSI styling when `use_color` is set
pub fn write_buffer(buf: &Buffer, use_color: bool, out: &mut impl Write) -> io::Result<()> {
    let area = buf.area;
    for y in area.top()..area.bottom() {
        let mut current: Option<(Color, Color, Modifier)> = None;
        let mut skip = 0;
        for x in area.left()..area.right() {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let cell = &buf[(x, y)];
            if use_color {
                let cell_style = (cell.fg, cell.bg, cell.modifier);
                if current != Some(cell_style) {
                    write_style(out, cell_style)?;
                    current = Some(cell_style);
                }
            }
            queue!(out, Print(cell.symbol()))?;
            skip = cell.symbol().width().saturating_sub(1);
        }
        if current.is_some() {
            queue!(out, SetAttribute(Attribute::Reset))?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

/// Render rows straight to text
pub fn render_to_string(rows: &[GameRow], style: &TableStyle, use_color: bool) -> io::Result<String> {
    let buf = render_buffer(rows, style);
    let mut out = Vec::new();
    write_buffer(&buf, use_color, &mut out)?;
    String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn write_style(out: &mut impl Write, (fg, bg, modifier): (Color, Color, Modifier)) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    if fg != Color::Reset {
        queue!(out, SetForegroundColor(to_crossterm_color(fg)))?;
    }
    if bg != Color::Reset {
        queue!(out, SetBackgroundColor(to_crossterm_color(bg)))?;
    }
    for (flag, attribute) in [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::REVERSED, Attribute::Reverse),
    ] {
        if modifier.contains(flag) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    Ok(())
}

fn to_crossterm_color(color: Color) -> CtColor {
    match color {
        Color::Reset => CtColor::Reset,
        Color::Black => CtColor::Black,
        Color::Red => CtColor::DarkRed,
        Color::Green => CtColor::DarkGreen,
        Color::Yellow => CtColor::DarkYellow,
        Color::Blue => CtColor::DarkBlue,
        Color::Magenta => CtColor::DarkMagenta,
        Color::Cyan => CtColor::DarkCyan,
        Color::Gray => CtColor::Grey,
        Color::DarkGray => CtColor::DarkGrey,
        Color::LightRed => CtColor::Red,
        Color::LightGreen => CtColor::Green,
        Color::LightYellow => CtColor::Yellow,
        Color::LightBlue => CtColor::Blue,
        Color::LightMagenta => CtColor::Magenta,
        Color::LightCyan => CtColor::Cyan,
        Color::White => CtColor::White,
        Color::Indexed(i) => CtColor::AnsiValue(i),
        Color::Rgb(r, g, b) => CtColor::Rgb { r, g, b },
    }
}
