use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Frame, Terminal};

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Draw once into a fresh test terminal and return the buffer
pub fn draw<F>(width: u16, height: u16, render: F) -> Buffer
where
    F: FnOnce(&mut Frame, Rect),
{
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut render = Some(render);
    terminal
        .draw(|f| {
            let area = f.area();
            if let Some(render) = render.take() {
                render(f, area);
            }
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Buffer rows as plain strings
pub fn lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| (area.x..area.x + area.width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

pub fn contains(buffer: &Buffer, needle: &str) -> bool {
    lines(buffer).iter().any(|line| line.contains(needle))
}

/// Row index of the first line containing `needle`
pub fn row_of(buffer: &Buffer, needle: &str) -> Option<usize> {
    lines(buffer).iter().position(|line| line.contains(needle))
}
