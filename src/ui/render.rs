use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::posts::PostsState;
use crate::ui::app::App;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let state = app.snapshot();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    draw_counter(frame, rows[0], state.counter.count);
    draw_posts(frame, rows[1], &state.posts);
    draw_footer(frame, rows[2], app.step());
}

fn draw_counter(frame: &mut Frame<'_>, area: Rect, count: i64) {
    let value = Paragraph::new(Line::from(format!("Count: {}", count)))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().title("Counter").borders(Borders::ALL));
    frame.render_widget(value, area);
}

fn draw_posts(frame: &mut Frame<'_>, area: Rect, posts: &PostsState) {
    let block = Block::default().title("Posts").borders(Borders::ALL);

    match posts {
        PostsState::Idle => {
            frame.render_widget(Paragraph::new("").block(block), area);
        }
        PostsState::Loading => {
            let loading = Paragraph::new("Loading posts...")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(loading, area);
        }
        PostsState::Failed { error } => {
            let message = Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .block(block);
            frame.render_widget(message, area);
        }
        PostsState::Succeeded { posts } if posts.is_empty() => {
            let empty = Paragraph::new("No posts found")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
        }
        PostsState::Succeeded { posts } => {
            let items: Vec<ListItem<'_>> = posts
                .iter()
                .map(|post| ListItem::new(post.name.as_str()))
                .collect();
            frame.render_widget(List::new(items).block(block), area);
        }
    }
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect, step: i64) {
    let hints = format!(
        "+/- by 1   ]/[ by {}   r reset   q quit",
        step
    );
    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
