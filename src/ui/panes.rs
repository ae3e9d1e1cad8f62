use crate::analysis::DashboardData;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, BarChart, Block, Borders, Chart, Dataset as ChartDataset, GraphType, List,
        ListItem, ListState, Paragraph, Wrap,
    },
    Frame,
};

/// Averages are kept at full precision in the pipeline; two decimals are a
/// display concern and applied only here.
pub fn format_average(value: f64) -> String {
    format!("{value:.2}")
}

pub fn render_metrics(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_metric(frame, chunks[0], "Number of Tweets", &data.tweet_count.to_string());
    render_metric(
        frame,
        chunks[1],
        "Average Retweets",
        &format_average(data.average_retweets),
    );
    render_metric(
        frame,
        chunks[2],
        "Average Likes",
        &format_average(data.average_likes),
    );
}

fn render_metric(frame: &mut Frame, area: Rect, label: &str, value: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        value.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL),
    );
    frame.render_widget(paragraph, area);
}

pub fn render_tweet_trend(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let points: Vec<(f64, f64)> = data
        .monthly_tweet_counts
        .iter()
        .enumerate()
        .map(|(i, (_, count))| (i as f64, *count as f64))
        .collect();

    let max_count = data
        .monthly_tweet_counts
        .iter()
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(0) as f64;
    let x_max = (points.len().saturating_sub(1)).max(1) as f64;
    let y_max = max_count.max(1.0);

    let series = ChartDataset::default()
        .name("tweets")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let x_labels: Vec<Span> = edge_labels(&data.monthly_tweet_counts)
        .into_iter()
        .map(Span::raw)
        .collect();
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{}", (y_max / 2.0).round() as u64)),
        Span::raw(format!("{}", y_max as u64)),
    ];

    let chart = Chart::new(vec![series])
        .block(
            Block::default()
                .title(" Month-wise Tweet Count ")
                .borders(Borders::ALL),
        )
        .x_axis(Axis::default().bounds([0.0, x_max]).labels(x_labels))
        .y_axis(Axis::default().bounds([0.0, y_max]).labels(y_labels));

    frame.render_widget(chart, area);
}

/// First and last month of a series, for the chart's x axis.
fn edge_labels<T>(series: &[(crate::dataset::MonthKey, T)]) -> Vec<String> {
    match series {
        [] => Vec::new(),
        [only] => vec![only.0.to_string()],
        [first, .., last] => vec![first.0.to_string(), last.0.to_string()],
    }
}

pub fn render_hashtag_bars(frame: &mut Frame, area: Rect, data: &DashboardData) {
    // one year per view, so the month number alone is unambiguous
    let labels: Vec<String> = data
        .monthly_hashtag_sums
        .iter()
        .map(|(month, _)| format!("{:02}", month.month()))
        .collect();
    let bars: Vec<(&str, u64)> = labels
        .iter()
        .zip(&data.monthly_hashtag_sums)
        .map(|(label, (_, sum))| (label.as_str(), *sum))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Month-wise Hashtag Count ")
                .borders(Borders::ALL),
        )
        .data(bars.as_slice())
        .bar_width(3)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Magenta))
        .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    frame.render_widget(chart, area);
}

pub fn render_top_tweets(
    frame: &mut Frame,
    area: Rect,
    data: &DashboardData,
    state: &ListState,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let block = Block::default()
        .title(" Top 10 Tweets by Likes ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let preview_width = area.width.saturating_sub(6).max(10) as usize;
    let items: Vec<ListItem> = data
        .top_tweets
        .iter()
        .enumerate()
        .map(|(i, tweet)| {
            let preview = preview_line(&tweet.text, preview_width);
            let title_line = Line::from(vec![
                Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(preview, Style::default().fg(Color::White)),
            ]);
            let meta_line = Line::from(vec![
                Span::styled("   ", Style::default()),
                Span::styled(
                    format!("{} likes", tweet.favorite_count),
                    Style::default().fg(Color::Cyan),
                ),
            ]);
            ListItem::new(vec![title_line, meta_line])
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = state.clone();
    frame.render_stateful_widget(list, area, &mut state);
}

/// First wrapped line of the tweet, with an ellipsis when text was cut.
fn preview_line(text: &str, width: usize) -> String {
    let wrapped = textwrap::wrap(text, width);
    match wrapped.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [first, ..] => format!("{}…", first),
    }
}

pub fn render_sentiment(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let total = data.sentiment.total().max(1);
    let rows = [
        ("Positive", data.sentiment.positive, Color::Green),
        ("Neutral", data.sentiment.neutral, Color::Gray),
        ("Negative", data.sentiment.negative, Color::Red),
    ];

    let lines: Vec<Line> = rows
        .iter()
        .map(|(label, count, color)| {
            let percent = 100.0 * *count as f64 / total as f64;
            Line::from(vec![
                Span::styled(format!("{label:<9}"), Style::default().fg(*color)),
                Span::styled(
                    format!("{count:>5}  ({percent:>5.1}%)"),
                    Style::default().fg(Color::White),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Sentiment ")
            .borders(Borders::ALL),
    );
    frame.render_widget(paragraph, area);
}

pub fn render_top_hashtags(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let items: Vec<ListItem> = data
        .top_hashtags
        .iter()
        .map(|(tag, count)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("#{tag}"), Style::default().fg(Color::Magenta)),
                Span::styled(format!("  ×{count}"), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Top Hashtags ")
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

pub fn render_no_data(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(
        "No data available for the selected Year and Source combination.",
    )
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
