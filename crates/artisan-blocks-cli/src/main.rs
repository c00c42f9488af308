use anyhow::Result;
use artisan_blocks_config::Config;
use artisan_blocks_engine::{io, registry};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

mod app;
mod lines;

use app::{App, Focus};

fn main() -> Result<()> {
    // Determine posts path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} <posts-folder-path>", args[0]);
            process::exit(1);
        }
    };

    let (posts_path, from_config) = match (args.len(), &config) {
        (2, _) => (PathBuf::from(&args[1]), false),
        (1, Some(config)) => (config.posts_path.clone(), true),
        (1, None) => {
            eprintln!("Error: No posts path provided and no config file found");
            eprintln!("Usage: {} <posts-folder-path>", args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        _ => {
            eprintln!("Usage: {} [posts-folder-path]", args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_posts_dir(&posts_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Posts path '{}'{source} is invalid: {e}",
            posts_path.display()
        );
        process::exit(1);
    }

    let options = config
        .as_ref()
        .map(Config::render_options)
        .unwrap_or_default();
    let mut app = App::new(posts_path, options)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code)
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(f.area());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Post list panel
    let post_items: Vec<ListItem> = app
        .posts
        .iter()
        .map(|post| {
            let path = post.relative_path();
            let folder = path.parent().map(|parent| parent.as_str()).unwrap_or("");
            let text = if folder.is_empty() {
                post.display_name().to_string()
            } else {
                format!("{} ({folder})", post.display_name())
            };
            ListItem::new(Line::from(vec![Span::raw(text)]))
        })
        .collect();

    let posts_list = List::new(post_items)
        .block(panel("Posts", app.focus == Focus::Posts))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(posts_list, chunks[0], &mut app.post_list_state);

    // Block panel
    let title = match app.selected_post() {
        Some(post) if app.is_dirty() => format!("{} *", post.display_name()),
        Some(post) => post.display_name().to_string(),
        None => "Blocks".to_string(),
    };
    let blocks_panel = panel(&title, app.focus == Focus::Blocks);

    if app.document.is_none() {
        let message = Paragraph::new("Select a post to view its blocks").block(blocks_panel);
        f.render_widget(message, chunks[1]);
    } else if app.rendered_blocks().is_empty() {
        let message =
            Paragraph::new("This post has no blocks yet. Press i to add one.").block(blocks_panel);
        f.render_widget(message, chunks[1]);
    } else {
        let block_items: Vec<ListItem> = app
            .rendered_blocks()
            .iter()
            .map(|block| {
                let style = if block.node.is_diagnostic() {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default()
                };
                let mut text: Vec<Line> = lines::block_lines(&block.node)
                    .into_iter()
                    .map(|line| Line::from(Span::styled(line, style)))
                    .collect();
                text.push(Line::from(""));
                ListItem::new(text)
            })
            .collect();

        let blocks_list = List::new(block_items)
            .block(blocks_panel)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        f.render_stateful_widget(blocks_list, chunks[1], &mut app.block_list_state);
    }

    // Status and key help
    let help = match app.focus {
        Focus::Posts => "q: Quit | ↑/k ↓/j: Select post | Enter/Tab: Blocks | s: Save",
        Focus::Blocks => {
            "↑/k ↓/j: Select | K/J: Move | d: Delete | i: Insert | s: Save | Esc/Tab: Posts"
        }
    };
    let mut footer = vec![Line::from(help)];
    if let Some(status) = &app.status {
        footer.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Cyan),
        )));
    }
    f.render_widget(Paragraph::new(footer), rows[1]);

    if let Some(menu) = app.insert_menu.as_mut() {
        let items: Vec<ListItem> = registry::TAGS
            .iter()
            .map(|info| ListItem::new(info.label))
            .collect();
        let height = items.len() as u16 + 2;
        let area = centered_rect(30, height, f.area());
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Insert block"))
            .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

        f.render_widget(Clear, area);
        f.render_stateful_widget(list, area, menu);
    }
}

fn panel(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use artisan_blocks_engine::RenderOptions;
    use crossterm::event::KeyCode;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_ui_shows_posts_and_blocks() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("kiln.json"),
            r#"[{"id": "a", "type": "heading", "data": {"text": "Firing day", "level": 2}}]"#,
        )
        .unwrap();
        let mut app = App::new(dir.path().to_path_buf(), RenderOptions::default()).unwrap();

        let screen = screen_text(&mut app);
        assert!(screen.contains("Posts"));
        assert!(screen.contains("kiln"));
        assert!(screen.contains("## Firing day"));
    }

    #[test]
    fn test_ui_shows_insert_menu() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("empty.json"), "[]").unwrap();
        let mut app = App::new(dir.path().to_path_buf(), RenderOptions::default()).unwrap();

        let screen = screen_text(&mut app);
        assert!(screen.contains("no blocks yet"));

        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('i'));
        let screen = screen_text(&mut app);
        assert!(screen.contains("Insert block"));
        assert!(screen.contains("Paragraph"));
    }
}
