use crate::chart::{display_key, BarItem, ChartData};
use crate::data::{self, Data, COLUMNS, HEADER};
use analysis::{frame_rows, LanguageFilter, QuestionId, Scope, Session};
use log::{debug, error};
use std::{error::Error, io};

use ratatui::{
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{self, Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span, Text},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, BorderType, Cell, Chart, Dataset, GraphType,
        HighlightSpacing, List, ListItem, ListState, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table, TableState, Tabs,
    },
    Frame, Terminal,
};
use style::palette::tailwind;
use unicode_width::UnicodeWidthStr;

const PALETTES: [tailwind::Palette; 4] = [
    tailwind::BLUE,
    tailwind::EMERALD,
    tailwind::INDIGO,
    tailwind::RED,
];
const REPOSITORIES_INFO: &str = "(q) quit | (tab) analysis | (↑↓) language | (space) toggle | (a) all | (n) none | (PgUp/PgDn) rows | (c) color";
const ANALYSIS_INFO: &str =
    "(q) quit | (tab) repositories | (↑↓) question | (f) full/filtered table | (c) color";

const ITEM_HEIGHT: usize = 1;
const LANGUAGE_PANE_WIDTH: u16 = 28;
const QUESTION_PANE_WIDTH: u16 = 56;

struct TableColors {
    buffer_bg: Color,
    header_bg: Color,
    header_fg: Color,
    row_fg: Color,
    selected_style_fg: Color,
    normal_row_color: Color,
    alt_row_color: Color,
    footer_border_color: Color,
    series: [Color; 2],
}

impl TableColors {
    const fn new(color: &tailwind::Palette) -> Self {
        Self {
            buffer_bg: tailwind::SLATE.c950,
            header_bg: color.c900,
            header_fg: tailwind::SLATE.c200,
            row_fg: tailwind::SLATE.c200,
            selected_style_fg: color.c400,
            normal_row_color: tailwind::SLATE.c950,
            alt_row_color: tailwind::SLATE.c900,
            footer_border_color: color.c400,
            series: [color.c400, tailwind::AMBER.c400],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Repositories,
    Analysis,
}

impl Tab {
    const TITLES: [&'static str; 2] = ["Repositories", "Analysis"];

    fn index(self) -> usize {
        match self {
            Tab::Repositories => 0,
            Tab::Analysis => 1,
        }
    }

    fn switch(self) -> Self {
        match self {
            Tab::Repositories => Tab::Analysis,
            Tab::Analysis => Tab::Repositories,
        }
    }
}

struct App {
    session: Session,
    scope: Scope,
    tab: Tab,
    language_state: ListState,
    question_state: ListState,
    state: TableState,
    items: Vec<Data>,
    longest_item_lens: [u16; COLUMNS],
    scroll_state: ScrollbarState,
    owners: ChartData,
    chart: ChartData,
    colors: TableColors,
    color_index: usize,
}

impl App {
    fn new(session: Session, scope: Scope, question: QuestionId) -> Self {
        let question_index = QuestionId::ALL
            .iter()
            .position(|q| *q == question)
            .unwrap_or(0);
        let mut app = Self {
            session,
            scope,
            tab: Tab::Repositories,
            language_state: ListState::default().with_selected(Some(0)),
            question_state: ListState::default().with_selected(Some(question_index)),
            state: TableState::default().with_selected(0),
            items: vec![],
            longest_item_lens: [0; COLUMNS],
            scroll_state: ScrollbarState::new(0),
            owners: ChartData::empty(OWNERS_TITLE, ""),
            chart: ChartData::empty(question.title(), ""),
            colors: TableColors::new(&PALETTES[0]),
            color_index: 0,
        };
        app.refresh_repositories();
        app.refresh_chart();
        app
    }

    fn question(&self) -> QuestionId {
        QuestionId::ALL[self.question_state.selected().unwrap_or(0)]
    }

    /// Re-filters the table after the language selection changed.
    fn refresh_repositories(&mut self) {
        match self.load_repositories() {
            Ok((items, owners)) => {
                self.items = items;
                self.owners = owners;
            }
            Err(e) => {
                error!("refresh repositories failed: {}", e);
                self.items = vec![];
                self.owners = ChartData::empty(OWNERS_TITLE, e.to_string());
            }
        }
        self.longest_item_lens = constraint_len_calculator(&self.items);
        self.state.select(Some(0));
        self.scroll_state =
            ScrollbarState::new(self.items.len().saturating_sub(1) * ITEM_HEIGHT);
        if self.scope == Scope::Filtered {
            self.refresh_chart();
        }
    }

    fn load_repositories(&self) -> Result<(Vec<Data>, ChartData), Box<dyn Error>> {
        let working = self.session.working_table()?;
        let items = data::repository_rows(&working)?;
        let rows = frame_rows(&self.session.top_owners()?)?;
        let owners = if rows.is_empty() {
            ChartData::empty(OWNERS_TITLE, "no repositories match the current filter")
        } else {
            ChartData::bars(OWNERS_TITLE, &rows, false)
        };
        Ok((items, owners))
    }

    fn refresh_chart(&mut self) {
        let question = self.question();
        debug!("analyzing {} on {:?} table", question, self.scope);
        self.chart = ChartData::from_result(question, self.session.analyze(question, self.scope));
    }

    /// Handles one key press; returns false when the dashboard should close.
    fn on_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Right | KeyCode::Left => {
                self.tab = self.tab.switch()
            }
            KeyCode::Char('c') => self.next_color(),
            _ => match self.tab {
                Tab::Repositories => self.on_repositories_key(code),
                Tab::Analysis => self.on_analysis_key(code),
            },
        }
        true
    }

    fn on_repositories_key(&mut self, code: KeyCode) {
        let count = self.session.languages().len();
        match code {
            KeyCode::Char('j') | KeyCode::Down => step(&mut self.language_state, count, true),
            KeyCode::Char('k') | KeyCode::Up => step(&mut self.language_state, count, false),
            KeyCode::Char(' ') | KeyCode::Enter => {
                let Some(i) = self.language_state.selected() else {
                    return;
                };
                if let Some(language) = self.session.languages().get(i).cloned() {
                    self.session.filter_mut().toggle(&language);
                    self.refresh_repositories();
                }
            }
            KeyCode::Char('a') => {
                let all: LanguageFilter = self.session.languages().iter().cloned().collect();
                self.session.set_filter(all);
                self.refresh_repositories();
            }
            KeyCode::Char('n') => {
                self.session.set_filter(LanguageFilter::none());
                self.refresh_repositories();
            }
            KeyCode::Char('J') | KeyCode::PageDown => self.next(),
            KeyCode::Char('K') | KeyCode::PageUp => self.previous(),
            _ => {}
        }
    }

    fn on_analysis_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('j') | KeyCode::Down => {
                step(&mut self.question_state, QuestionId::ALL.len(), true);
                self.refresh_chart();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                step(&mut self.question_state, QuestionId::ALL.len(), false);
                self.refresh_chart();
            }
            KeyCode::Char('f') => {
                self.scope = match self.scope {
                    Scope::Full => Scope::Filtered,
                    Scope::Filtered => Scope::Full,
                };
                self.refresh_chart();
            }
            _ => {}
        }
    }

    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.items.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
        self.scroll_state = self.scroll_state.position(i * ITEM_HEIGHT);
    }

    pub fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.items.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
        self.scroll_state = self.scroll_state.position(i * ITEM_HEIGHT);
    }

    pub fn next_color(&mut self) {
        self.color_index = (self.color_index + 1) % PALETTES.len();
    }

    pub fn set_colors(&mut self) {
        self.colors = TableColors::new(&PALETTES[self.color_index]);
    }
}

const OWNERS_TITLE: &str = "Top Users by Stars";

/// Moves a list cursor one step, wrapping at both ends.
fn step(state: &mut ListState, len: usize, forward: bool) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None => 0,
    };
    state.select(Some(i));
}

/// Opens the dashboard on the terminal and blocks until the user quits.
pub fn run(session: Session, scope: Scope, question: QuestionId) -> Result<(), Box<dyn Error>> {
    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // create app and run it
    let app = App::new(session, scope, question);
    let res = run_app(&mut terminal, app);

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, &mut app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && !app.on_key(key.code) {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rects = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
    ])
    .split(f.area());

    app.set_colors();

    render_tabs(f, app, rects[0]);
    match app.tab {
        Tab::Repositories => render_repositories(f, app, rects[1]),
        Tab::Analysis => render_analysis(f, app, rects[1]),
    }
    render_footer(f, app, rects[2]);
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let tabs = Tabs::new(Tab::TITLES.to_vec())
        .select(app.tab.index())
        .style(Style::new().fg(app.colors.row_fg).bg(app.colors.buffer_bg))
        .highlight_style(
            Style::new()
                .fg(app.colors.selected_style_fg)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::bordered().title("GitHub Data Dive"));
    f.render_widget(tabs, area);
}

fn render_repositories(f: &mut Frame, app: &mut App, area: Rect) {
    let columns =
        Layout::horizontal([Constraint::Length(LANGUAGE_PANE_WIDTH), Constraint::Min(0)])
            .split(area);
    let right = Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[1]);

    render_languages(f, app, columns[0]);
    render_table(f, app, right[0]);
    render_scrollbar(f, app, right[0]);
    render_chart(f, &app.colors, &app.owners, right[1]);
}

fn render_languages(f: &mut Frame, app: &mut App, area: Rect) {
    let filter = app.session.filter();
    let items: Vec<ListItem> = app
        .session
        .languages()
        .iter()
        .map(|language| {
            let mark = if filter.contains(language) { "x" } else { " " };
            ListItem::new(format!("[{}] {}", mark, display_key(language)))
        })
        .collect();
    let title = format!(
        "Languages {}/{}",
        filter.len(),
        app.session.languages().len()
    );
    let list = List::new(items)
        .block(Block::bordered().title(title))
        .style(Style::new().fg(app.colors.row_fg).bg(app.colors.buffer_bg))
        .highlight_style(Style::new().fg(app.colors.selected_style_fg))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.language_state);
}

fn render_analysis(f: &mut Frame, app: &mut App, area: Rect) {
    let columns =
        Layout::horizontal([Constraint::Length(QUESTION_PANE_WIDTH), Constraint::Min(0)])
            .split(area);

    let items: Vec<ListItem> = QuestionId::ALL
        .iter()
        .map(|q| ListItem::new(q.title()))
        .collect();
    let scope = match app.scope {
        Scope::Full => "all repositories",
        Scope::Filtered => "filtered repositories",
    };
    let list = List::new(items)
        .block(Block::bordered().title(format!("Questions ({scope})")))
        .style(Style::new().fg(app.colors.row_fg).bg(app.colors.buffer_bg))
        .highlight_style(Style::new().fg(app.colors.selected_style_fg))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, columns[0], &mut app.question_state);

    render_chart(f, &app.colors, &app.chart, columns[1]);
}

fn render_chart(f: &mut Frame, colors: &TableColors, chart: &ChartData, area: Rect) {
    match chart {
        ChartData::Bars { title, bars } => render_bars(f, colors, title, bars, area),
        ChartData::Trend {
            title,
            months,
            series,
        } => render_trend(f, colors, title, months, series, area),
        ChartData::Empty { title, message } => {
            let placeholder = Paragraph::new(message.as_str())
                .style(Style::new().fg(colors.row_fg).bg(colors.buffer_bg))
                .centered()
                .block(Block::bordered().title(title.as_str()));
            f.render_widget(placeholder, area);
        }
    }
}

fn render_bars(f: &mut Frame, colors: &TableColors, title: &str, items: &[BarItem], area: Rect) {
    let bars: Vec<Bar> = items
        .iter()
        .map(|item| {
            Bar::default()
                .value(item.value)
                .label(Line::from(item.label.as_str()))
                .text_value(item.text.clone())
        })
        .collect();
    let chart = BarChart::default()
        .block(Block::bordered().title(title))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::new().fg(colors.selected_style_fg))
        .value_style(Style::new().fg(colors.header_fg).bg(colors.header_bg))
        .style(Style::new().bg(colors.buffer_bg))
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

fn render_trend(
    f: &mut Frame,
    colors: &TableColors,
    title: &str,
    months: &[String],
    series: &[(String, Vec<(f64, f64)>)],
    area: Rect,
) {
    let datasets: Vec<Dataset> = series
        .iter()
        .zip(colors.series.iter().cycle())
        .map(|((name, points), color)| {
            Dataset::default()
                .name(name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::new().fg(*color))
                .data(points)
        })
        .collect();
    let max_y = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|(_, y)| *y))
        .fold(1.0_f64, f64::max);
    let max_x = months.len().saturating_sub(1).max(1) as f64;
    let x_labels: Vec<Span> = match (months.first(), months.last()) {
        (Some(first), Some(last)) => vec![Span::raw(first.clone()), Span::raw(last.clone())],
        _ => vec![],
    };

    let chart = Chart::new(datasets)
        .block(Block::bordered().title(title))
        .style(Style::new().fg(colors.row_fg).bg(colors.buffer_bg))
        .x_axis(
            Axis::default()
                .title("Month")
                .bounds([0.0, max_x])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Count")
                .bounds([0.0, max_y])
                .labels(vec![Span::raw("0"), Span::raw(format!("{max_y:.0}"))]),
        );
    f.render_widget(chart, area);
}

fn render_table(f: &mut Frame, app: &mut App, area: Rect) {
    let header_style = Style::default()
        .fg(app.colors.header_fg)
        .bg(app.colors.header_bg);
    let selected_style = Style::default()
        .add_modifier(Modifier::REVERSED)
        .fg(app.colors.selected_style_fg);

    let header = HEADER
        .into_iter()
        .map(Cell::from)
        .collect::<Row>()
        .style(header_style)
        .height(1);
    let rows = app.items.iter().enumerate().map(|(i, data)| {
        let color = match i % 2 {
            0 => app.colors.normal_row_color,
            _ => app.colors.alt_row_color,
        };
        let item = data.ref_array();
        item.into_iter()
            .map(|content| Cell::from(Text::from(content.as_str())))
            .collect::<Row>()
            .style(Style::new().fg(app.colors.row_fg).bg(color))
            .height(ITEM_HEIGHT as u16)
    });
    let bar = " █ ";
    let t = Table::new(
        rows,
        app.longest_item_lens
            .iter()
            // + 1 is for padding.
            .map(|len| Constraint::Min(len + 1)),
    )
    .header(header)
    .block(Block::bordered().title(format!("Filtered Repositories ({})", app.items.len())))
    .highlight_style(selected_style)
    .highlight_symbol(bar)
    .bg(app.colors.buffer_bg)
    .highlight_spacing(HighlightSpacing::Always);
    f.render_stateful_widget(t, area, &mut app.state);
}

fn constraint_len_calculator(items: &[Data]) -> [u16; COLUMNS] {
    let mut lens = HEADER.map(UnicodeWidthStr::width);
    for item in items {
        for (len, content) in lens.iter_mut().zip(item.ref_array()) {
            *len = (*len).max(content.width());
        }
    }
    #[allow(clippy::cast_possible_truncation)]
    lens.map(|len| len as u16)
}

fn render_scrollbar(f: &mut Frame, app: &mut App, area: Rect) {
    f.render_stateful_widget(
        Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None),
        area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        }),
        &mut app.scroll_state,
    );
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let info = match app.tab {
        Tab::Repositories => REPOSITORIES_INFO,
        Tab::Analysis => ANALYSIS_INFO,
    };
    let info_footer = Paragraph::new(Line::from(info))
        .style(Style::new().fg(app.colors.row_fg).bg(app.colors.buffer_bg))
        .centered()
        .block(
            Block::bordered()
                .border_type(BorderType::Double)
                .border_style(Style::new().fg(app.colors.footer_border_color)),
        );
    f.render_widget(info_footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis::columns::*;
    use analysis::RepositoryTable;
    use chrono::NaiveDate;
    use polars::prelude::*;
    use ratatui::backend::TestBackend;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn session() -> Session {
        let frame = df!(
            OWNER => &["alice", "bob", "carol"],
            NAME => &["alpha", "beta", "gamma"],
            LANGUAGE => &["Rust", "Go", "Rust"],
            LICENSE => &["MIT", "MIT", ""],
            STARS => &[50i64, 10, 30],
            FORKS => &[5i64, 20, 1],
            OPEN_ISSUES => &[3i64, 9, 0],
            CREATED => &[date("2023-01-10"), date("2023-01-22"), date("2023-02-05")],
            UPDATED => &[date("2023-03-01"), date("2023-01-30"), date("2023-03-15")]
        )
        .unwrap();
        Session::new(RepositoryTable::from_frame(frame).unwrap()).unwrap()
    }

    #[test]
    fn constraint_len_calculator() {
        let test_data = vec![
            Data {
                repository: "test-git-stats".to_string(),
                owner: "Peter".to_string(),
                language: "Rust".to_string(),
                license: "Apache-2.0".to_string(),
                stars: "19".to_string(),
                forks: "123".to_string(),
                open_issues: "1".to_string(),
                created: "2024-07-05".to_string(),
                updated: "2024-07-06".to_string(),
            },
            Data {
                repository: "test-git-stats2".to_string(),
                owner: "26huitailang".to_string(),
                language: "Go".to_string(),
                license: "MIT".to_string(),
                stars: "1191".to_string(),
                forks: "235".to_string(),
                open_issues: "12".to_string(),
                created: "2024-06-07".to_string(),
                updated: "2024-06-08".to_string(),
            },
        ];
        let lens = super::constraint_len_calculator(&test_data);
        assert_eq!(lens, [15, 12, 8, 10, 5, 5, 6, 10, 10]);
    }

    #[test]
    fn starts_on_first_question_with_all_rows() {
        let app = App::new(session(), Scope::Full, QuestionId::default());
        assert_eq!(app.items.len(), 3);
        assert_eq!(app.question(), QuestionId::TopStars);
        assert!(matches!(app.chart, ChartData::Bars { .. }));
        assert!(matches!(app.owners, ChartData::Bars { .. }));
    }

    #[test]
    fn toggling_language_refilters() {
        let mut app = App::new(session(), Scope::Full, QuestionId::default());
        // cursor starts on "Rust"
        assert!(app.on_key(KeyCode::Char(' ')));
        assert_eq!(app.items.len(), 1);
        assert_eq!(app.items[0].repository, "beta");

        app.on_key(KeyCode::Char('n'));
        assert!(app.items.is_empty());
        assert!(matches!(app.owners, ChartData::Empty { .. }));

        app.on_key(KeyCode::Char('a'));
        assert_eq!(app.items.len(), 3);
    }

    #[test]
    fn analysis_keys_change_question_and_scope() {
        let mut app = App::new(session(), Scope::Full, QuestionId::default());
        app.on_key(KeyCode::Tab);
        assert_eq!(app.tab, Tab::Analysis);

        app.on_key(KeyCode::Up);
        assert_eq!(app.question(), QuestionId::TopOpenIssues);
        app.on_key(KeyCode::Down);
        app.on_key(KeyCode::Down);
        assert_eq!(app.question(), QuestionId::TopForks);

        app.on_key(KeyCode::Tab);
        app.on_key(KeyCode::Char('n'));
        app.on_key(KeyCode::Tab);
        // the full table is unaffected by the filter
        assert!(matches!(app.chart, ChartData::Bars { .. }));
        app.on_key(KeyCode::Char('f'));
        assert_eq!(
            app.chart,
            ChartData::empty(QuestionId::TopForks.title(), "no repositories to analyze")
        );
    }

    #[test]
    fn trend_question_draws_lines() {
        let app = App::new(session(), Scope::Full, QuestionId::MonthlyTrend);
        match &app.chart {
            ChartData::Trend { months, series, .. } => {
                assert_eq!(months, &["2023-01", "2023-02", "2023-03"]);
                assert_eq!(series.len(), 2);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
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
    fn renders_both_tabs() {
        let mut session = session();
        session.select_languages(&["Go", "COBOL"]);
        let mut app = App::new(session, Scope::Full, QuestionId::default());
        let screen = draw(&mut app);
        assert!(screen.contains("Languages 1/2"));
        assert!(screen.contains("beta"));
        assert!(!screen.contains("gamma"));

        app.on_key(KeyCode::Tab);
        let screen = draw(&mut app);
        assert!(screen.contains(QuestionId::TopStars.title()));
    }

    #[test]
    fn quit_keys() {
        let mut app = App::new(session(), Scope::Full, QuestionId::default());
        assert!(!app.on_key(KeyCode::Char('q')));
        assert!(!app.on_key(KeyCode::Esc));
    }
}
