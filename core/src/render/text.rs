use crate::math::{nice_step, nice_ticks, tick_label, Viewport};
use crate::prelude::{FigureSize, HorizontalAlign, MarkerStyle, PlotResult, Surface, TextStyle};
use crate::render::scene::Scene;
use log::debug;
use std::io::Write;

const COLS_PER_INCH: f32 = 8.0;
const ROWS_PER_INCH: f32 = 4.0;
const MIN_COLS: usize = 24;
const MIN_ROWS: usize = 10;
const MAX_TICKS: usize = 6;

const MARKER: char = 'o';
const GRID: char = '.';

/// Surface that prints the finished plot as a character grid.
///
/// Drawing calls are recorded into a [`Scene`]; `present` lays the scene
/// out and writes it to the sink.
pub struct TextSurface<W: Write> {
    scene: Scene,
    sink: W,
}

impl<W: Write> TextSurface<W> {
    pub fn new(sink: W) -> Self {
        Self {
            scene: Scene::default(),
            sink,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> Surface for TextSurface<W> {
    fn begin(&mut self, size: FigureSize) -> PlotResult<()> {
        self.scene.begin(size)
    }

    fn scatter(&mut self, xs: &[f64], ys: &[f64], marker: &MarkerStyle) -> PlotResult<()> {
        self.scene.scatter(xs, ys, marker)
    }

    fn text(&mut self, x: f64, y: f64, label: &str, style: &TextStyle) -> PlotResult<()> {
        self.scene.text(x, y, label, style)
    }

    fn x_label(&mut self, label: &str) -> PlotResult<()> {
        self.scene.x_label(label)
    }

    fn y_label(&mut self, label: &str) -> PlotResult<()> {
        self.scene.y_label(label)
    }

    fn title(&mut self, title: &str) -> PlotResult<()> {
        self.scene.title(title)
    }

    fn grid(&mut self, visible: bool) -> PlotResult<()> {
        self.scene.grid(visible)
    }

    fn present(&mut self) -> PlotResult<()> {
        self.scene.present()?;
        let raster = rasterize(&self.scene);
        debug!("TextSurface writing {} lines", raster.lines().count());
        self.sink.write_all(raster.as_bytes())?;
        self.sink.write_all(b"\n")?;
        self.sink.flush()?;
        Ok(())
    }
}

struct CharCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<Vec<char>>,
}

impl CharCanvas {
    fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![vec![' '; cols]; rows],
        }
    }

    fn cell_mut(&mut self, col: i64, row: i64) -> Option<&mut char> {
        if col < 0 || row < 0 {
            return None;
        }
        self.cells.get_mut(row as usize)?.get_mut(col as usize)
    }

    fn put(&mut self, col: i64, row: i64, ch: char) {
        if let Some(cell) = self.cell_mut(col, row) {
            *cell = ch;
        }
    }

    fn put_if_blank(&mut self, col: i64, row: i64, ch: char) {
        if let Some(cell) = self.cell_mut(col, row) {
            if *cell == ' ' {
                *cell = ch;
            }
        }
    }

    fn write(&mut self, col: i64, row: i64, text: &str) {
        for (offset, ch) in text.chars().enumerate() {
            self.put(col + offset as i64, row, ch);
        }
    }

    fn write_centered(&mut self, center: i64, row: i64, text: &str) {
        let width = text.chars().count() as i64;
        self.write(center - width / 2, row, text);
    }

    fn render(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn cell(value: f64) -> i64 {
    value.round() as i64
}

/// Lays a scene out on a character grid sized from its figure.
///
/// Title on the first row, y label above the axes, tick labels left of and
/// below the frame, x label on the last row.
pub fn rasterize(scene: &Scene) -> String {
    let cols = ((scene.figure.width * COLS_PER_INCH).round() as usize).max(MIN_COLS);
    let rows = ((scene.figure.height * ROWS_PER_INCH).round() as usize).max(MIN_ROWS);
    let mut canvas = CharCanvas::new(cols, rows);

    let (x_range, y_range) = scene.bounds();
    let x_step = nice_step(x_range.span(), MAX_TICKS);
    let y_step = nice_step(y_range.span(), MAX_TICKS);
    let x_ticks = nice_ticks(x_range, MAX_TICKS);
    let y_ticks = nice_ticks(y_range, MAX_TICKS);
    let y_tick_labels: Vec<String> = y_ticks
        .iter()
        .map(|tick| tick_label(*tick, y_step))
        .collect();

    let gutter = y_tick_labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);
    let left = gutter + 2;
    let top = 3;
    let bottom = rows - 4;
    let right = (cols - 2).max(left + 1);
    let viewport = Viewport::new(
        x_range,
        y_range,
        left as f64,
        top as f64,
        (right - left) as f64,
        (bottom - top) as f64,
    );
    let (left, top, bottom, right) = (left as i64, top as i64, bottom as i64, right as i64);

    if let Some(title) = &scene.title {
        canvas.write_centered(canvas.cols as i64 / 2, 0, title);
    }
    if let Some(label) = &scene.y_label {
        canvas.write(0, 1, label);
    }

    for col in left - 1..=right + 1 {
        canvas.put(col, top - 1, '-');
        canvas.put(col, bottom + 1, '-');
    }
    for row in top..=bottom {
        canvas.put(left - 1, row, '|');
        canvas.put(right + 1, row, '|');
    }
    for (col, row) in [
        (left - 1, top - 1),
        (right + 1, top - 1),
        (left - 1, bottom + 1),
        (right + 1, bottom + 1),
    ] {
        canvas.put(col, row, '+');
    }

    if scene.grid {
        for tick in &x_ticks {
            let col = cell(viewport.map_x(*tick));
            for row in top..=bottom {
                canvas.put_if_blank(col, row, GRID);
            }
        }
        for tick in &y_ticks {
            let row = cell(viewport.map_y(*tick));
            for col in left..=right {
                canvas.put_if_blank(col, row, GRID);
            }
        }
    }

    for (tick, label) in y_ticks.iter().zip(&y_tick_labels) {
        let row = cell(viewport.map_y(*tick));
        let width = label.chars().count() as i64;
        canvas.write(left - 2 - width, row, label);
    }

    let mut next_free = i64::MIN;
    for tick in &x_ticks {
        let label = tick_label(*tick, x_step);
        let width = label.chars().count() as i64;
        let start = cell(viewport.map_x(*tick)) - width / 2;
        if start >= next_free {
            canvas.write(start, bottom + 2, &label);
            next_free = start + width + 1;
        }
    }

    if let Some(label) = &scene.x_label {
        canvas.write_centered((left + right) / 2, canvas.rows as i64 - 1, label);
    }

    for marker in &scene.markers {
        let (x, y) = viewport.map(marker.x, marker.y);
        canvas.put(cell(x), cell(y), MARKER);
    }

    for annotation in &scene.annotations {
        let (x, y) = viewport.map(annotation.x, annotation.y);
        let (col, row) = (cell(x), cell(y));
        let width = annotation.label.chars().count() as i64;
        let start = match annotation.style.align {
            HorizontalAlign::Right => col - width,
            HorizontalAlign::Left => col + 1,
            HorizontalAlign::Center => col - width / 2,
        };
        canvas.write(start, row, &annotation.label);
    }

    canvas.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::{Color, PlotStyle};
    use crate::render::PointRenderer;
    use crate::roster::{frankfurt_teams, Columns, TeamRecord};

    #[test]
    fn frankfurt_raster_shows_every_active_team() {
        let mut surface = TextSurface::new(Vec::new());
        PointRenderer::default()
            .render(&Columns::project(&frankfurt_teams()), &mut surface)
            .unwrap();
        let output = String::from_utf8(surface.into_inner()).unwrap();

        assert!(output.contains("Position of teams in Frankfurt am Main"));
        assert!(output.contains("latitude"));
        assert!(output.contains("longitude"));
        for n in 1..=9 {
            assert!(output.contains(&format!("Team {n}")), "missing Team {n}");
        }
        assert!(!output.contains("Team 10"));
        assert_eq!(output.trim_end().lines().count(), 32);
    }

    #[test]
    fn empty_scene_keeps_unit_axes() {
        let mut surface = TextSurface::new(Vec::new());
        PointRenderer::default()
            .render(&Columns::default(), &mut surface)
            .unwrap();
        assert!(surface.scene().markers.is_empty());
        let output = String::from_utf8(surface.into_inner()).unwrap();
        assert!(output.contains("Position of teams in Frankfurt am Main"));
        assert!(output.contains("0.0"));
        assert!(output.contains("1.0"));
    }

    #[test]
    fn right_aligned_label_ends_left_of_marker() {
        let mut scene = Scene::default();
        let marker = MarkerStyle {
            color: Color::BLUE,
            radius: 3.0,
        };
        scene.scatter(&[0.0, 10.0], &[0.0, 10.0], &marker).unwrap();
        let style = PlotStyle::default().label_style();
        scene.text(10.0, 10.0, "Team X", &style).unwrap();

        let raster = rasterize(&scene);
        let line = raster
            .lines()
            .find(|line| line.contains("Team X"))
            .unwrap();
        assert!(line.contains("Team Xo"));
    }

    #[test]
    fn grid_dots_follow_grid_flag() {
        let columns = Columns::project(&[
            TeamRecord::new(0.0, 0.0, "a"),
            TeamRecord::new(1.0, 1.0, "b"),
        ]);
        let mut with_grid = Scene::default();
        PointRenderer::default().render(&columns, &mut with_grid).unwrap();

        let style = PlotStyle {
            grid: false,
            ..PlotStyle::default()
        };
        let mut without_grid = Scene::default();
        PointRenderer::new(style)
            .render(&columns, &mut without_grid)
            .unwrap();

        let dots = |scene: &Scene| rasterize(scene).matches("..").count();
        assert!(dots(&with_grid) > 0);
        assert_eq!(dots(&without_grid), 0);
    }
}
