use std::io::Result;

use crossterm::event::{self, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span, Text},
    widgets::{block::Title, Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::logic::{
    card::CardState,
    roster::{PlayerRoster, RosterCard, RosterPlayer},
};

struct InnerRects {
    current_player: Rect,
    roster: Rect,
}

#[derive(typed_builder::TypedBuilder)]
pub struct TuiApp {
    panel_width: u16,
    roster: PlayerRoster,
    exit: bool,
}

impl TuiApp {
    pub fn run(&mut self, terminal: &mut super::tui::Tui) -> Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.render_frame(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn render_frame(&self, frame: &mut Frame) {
        let inner_rects = self.split_rects(frame.size());
        self.render_current_player(inner_rects.current_player, frame);
        self.render_roster(inner_rects.roster, frame);
    }

    fn handle_events(&mut self) -> Result<()> {
        match event::read()? {
            event::Event::Key(event) => match (event.code, event.kind) {
                (KeyCode::Char('q'), KeyEventKind::Press) => self.exit = true,
                _ => {}
            },
            _ => {}
        }

        Ok(())
    }

    fn split_rects(&self, rect: Rect) -> InnerRects {
        let current_player_height = (rect.height / 3).max(7).min(rect.height);

        let current_player = Rect {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: current_player_height,
        };

        let roster = Rect {
            x: rect.x,
            y: rect.y + current_player_height,
            width: rect.width,
            height: rect.height - current_player_height,
        };

        InnerRects {
            current_player,
            roster,
        }
    }

    fn render_current_player(&self, area: Rect, frame: &mut Frame) -> Rect {
        let title = Title::from(" coupTUI ".bold());

        let block = Block::default()
            .title(title.alignment(Alignment::Center))
            .borders(Borders::ALL)
            .border_set(border::THICK)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        let text = Text::from(self.player_lines(&self.roster.current_player));
        frame.render_widget(Paragraph::new(text).centered().block(block), area);

        inner
    }

    fn render_roster(&self, area: Rect, frame: &mut Frame) {
        if self.roster.players.is_empty() {
            return;
        }

        let panel_constraints = self
            .roster
            .players
            .iter()
            .map(|_| Constraint::Min(self.panel_width))
            .collect::<Vec<_>>();

        let panel_rects = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(panel_constraints)
            .split(area);

        for (player, panel_rect) in self.roster.players.iter().zip(panel_rects.iter()) {
            self.render_player_panel(player, *panel_rect, frame);
        }
    }

    fn render_player_panel(&self, player: &RosterPlayer, area: Rect, frame: &mut Frame) {
        let title = Title::from(format!(" {} ", player.name).bold());

        let block = Block::default()
            .title(title.alignment(Alignment::Center))
            .borders(Borders::ALL)
            .border_set(border::THICK)
            .border_type(BorderType::Rounded);

        let text = Text::from(self.player_lines(player));
        frame.render_widget(Paragraph::new(text).centered().block(block), area);
    }

    fn player_lines(&self, player: &RosterPlayer) -> Vec<Line> {
        let mut lines = vec![
            Line::from(player.name.clone().bold()),
            self.coins_line(player),
        ];
        lines.extend(player.cards.iter().map(|card| self.card_line(card)));
        lines
    }

    // one glyph per derived coin entry; the array's length is the count
    fn coins_line(&self, player: &RosterPlayer) -> Line {
        let glyphs = player
            .coins_array
            .iter()
            .map(|_| "●")
            .collect::<Vec<_>>()
            .join(" ");
        Line::from(Span::styled(glyphs, Style::default().fg(Color::Yellow)))
    }

    fn card_line(&self, card: &RosterCard) -> Line {
        let label = card.label.clone().unwrap_or_else(|| "Hidden".to_string());

        let style = match card.state {
            CardState::Alive => Style::default().fg(Color::White),
            CardState::Dead => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        };

        Line::from(Span::styled(label, style))
    }
}
