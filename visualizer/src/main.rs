use iced::{
    alignment, mouse,
    widget::{
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, text, Container,
    },
    Color, Element, Length, Pixels, Point, Rectangle, Renderer, Size, Task, Theme,
};
use log::{error, info};
use teammap::math::{nice_step, nice_ticks, tick_label, Viewport};
use teammap::prelude::{Color as PlotColor, FigureSize, HorizontalAlign};
use teammap::{frankfurt_teams, Columns, PlotStyle, PointRenderer, Scene};

const MAX_TICKS: usize = 6;
const MARGIN_LEFT: f32 = 90.0;
const MARGIN_RIGHT: f32 = 40.0;
const MARGIN_TOP: f32 = 60.0;
const MARGIN_BOTTOM: f32 = 70.0;
const GRID_COLOR: Color = Color::from_rgb(0.85, 0.85, 0.85);

fn main() -> iced::Result {
    env_logger::init();
    let (width, height) = PlotStyle::default().figure.to_pixels();
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .theme(application_theme)
        .window_size(Size::new(width, height))
        .run()
}

fn application_title(state: &Visualizer) -> String {
    state
        .scene
        .title
        .clone()
        .unwrap_or_else(|| "Team map".into())
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Light
}

#[derive(Debug)]
struct Visualizer {
    scene: Scene,
    status: String,
}

#[derive(Debug, Clone)]
enum Message {}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        let columns = Columns::project(&frankfurt_teams());
        let mut scene = Scene::default();
        let status = match PointRenderer::default().render(&columns, &mut scene) {
            Ok(summary) => {
                info!("scene ready with {} markers", summary.points);
                format!("{} teams plotted", summary.points)
            }
            Err(err) => {
                error!("rendering scene failed: {err}");
                format!("Render error: {err}")
            }
        };
        (Visualizer { scene, status }, Task::none())
    }

    fn update(_state: &mut Self, message: Message) -> Task<Message> {
        match message {}
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let figure = Canvas::new(FigureCanvas {
            scene: state.scene.clone(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let layout = column![figure, text(&state.status).size(12)]
            .spacing(4)
            .padding(8);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn to_iced(color: PlotColor) -> Color {
    Color::from_rgb(color.r, color.g, color.b)
}

fn to_horizontal(align: HorizontalAlign) -> alignment::Horizontal {
    match align {
        HorizontalAlign::Left => alignment::Horizontal::Left,
        HorizontalAlign::Center => alignment::Horizontal::Center,
        HorizontalAlign::Right => alignment::Horizontal::Right,
    }
}

fn label(
    content: impl Into<String>,
    position: Point,
    size: f32,
    align_x: alignment::Horizontal,
    align_y: alignment::Vertical,
) -> canvas::Text {
    canvas::Text {
        content: content.into(),
        position,
        color: Color::BLACK,
        size: Pixels(size),
        align_x: align_x.into(),
        align_y,
        ..canvas::Text::default()
    }
}

/// Canvas program that paints a recorded [`Scene`] like a figure window.
#[derive(Clone)]
struct FigureCanvas {
    scene: Scene,
}

impl FigureCanvas {
    /// Ratio between the available canvas and the figure's nominal pixel size.
    fn scale(&self, bounds: Size) -> f32 {
        let (width, height) = self.scene.figure.to_pixels();
        (bounds.width / width).min(bounds.height / height).max(0.1)
    }
}

impl canvas::Program<Message> for FigureCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::WHITE);

        let scale = self.scale(bounds.size());
        let points_to_px = FigureSize::DPI / 72.0 * scale;
        let plot_width = (bounds.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_height = (bounds.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);

        let (x_range, y_range) = self.scene.bounds();
        let viewport = Viewport::new(
            x_range,
            y_range,
            f64::from(MARGIN_LEFT),
            f64::from(MARGIN_TOP),
            f64::from(plot_width),
            f64::from(plot_height),
        );
        let to_point = |x: f64, y: f64| {
            let (px, py) = viewport.map(x, y);
            Point::new(px as f32, py as f32)
        };
        let left = MARGIN_LEFT;
        let top = MARGIN_TOP;
        let right = viewport.right() as f32;
        let bottom = viewport.bottom() as f32;

        let x_step = nice_step(x_range.span(), MAX_TICKS);
        let y_step = nice_step(y_range.span(), MAX_TICKS);
        let x_ticks = nice_ticks(x_range, MAX_TICKS);
        let y_ticks = nice_ticks(y_range, MAX_TICKS);

        if self.scene.grid {
            let grid_stroke = Stroke::default().with_color(GRID_COLOR).with_width(0.8);
            for tick in &x_ticks {
                let x = viewport.map_x(*tick) as f32;
                let line = Path::line(Point::new(x, top), Point::new(x, bottom));
                frame.stroke(&line, grid_stroke.clone());
            }
            for tick in &y_ticks {
                let y = viewport.map_y(*tick) as f32;
                let line = Path::line(Point::new(left, y), Point::new(right, y));
                frame.stroke(&line, grid_stroke.clone());
            }
        }

        let axes = Path::rectangle(Point::new(left, top), Size::new(plot_width, plot_height));
        frame.stroke(
            &axes,
            Stroke::default().with_color(Color::BLACK).with_width(1.0),
        );

        let tick_size = 10.0 * points_to_px;
        for tick in &x_ticks {
            let x = viewport.map_x(*tick) as f32;
            frame.fill_text(label(
                tick_label(*tick, x_step),
                Point::new(x, bottom + 6.0),
                tick_size,
                alignment::Horizontal::Center,
                alignment::Vertical::Top,
            ));
        }
        for tick in &y_ticks {
            let y = viewport.map_y(*tick) as f32;
            frame.fill_text(label(
                tick_label(*tick, y_step),
                Point::new(left - 6.0, y),
                tick_size,
                alignment::Horizontal::Right,
                alignment::Vertical::Center,
            ));
        }

        for marker in &self.scene.markers {
            let dot = Path::circle(to_point(marker.x, marker.y), marker.radius * points_to_px);
            frame.fill(&dot, to_iced(marker.color));
        }

        for annotation in &self.scene.annotations {
            let mut text = label(
                annotation.label.clone(),
                to_point(annotation.x, annotation.y),
                annotation.style.font_size * points_to_px,
                to_horizontal(annotation.style.align),
                alignment::Vertical::Bottom,
            );
            text.color = to_iced(annotation.style.color);
            frame.fill_text(text);
        }

        let center_x = left + plot_width / 2.0;
        if let Some(title) = &self.scene.title {
            frame.fill_text(label(
                title.clone(),
                Point::new(center_x, top / 2.0 - 6.0),
                12.0 * points_to_px,
                alignment::Horizontal::Center,
                alignment::Vertical::Center,
            ));
        }
        if let Some(x_label) = &self.scene.x_label {
            frame.fill_text(label(
                x_label.clone(),
                Point::new(center_x, bottom + MARGIN_BOTTOM - 16.0),
                10.0 * points_to_px,
                alignment::Horizontal::Center,
                alignment::Vertical::Bottom,
            ));
        }
        if let Some(y_label) = &self.scene.y_label {
            frame.fill_text(label(
                y_label.clone(),
                Point::new(left, top - 8.0),
                10.0 * points_to_px,
                alignment::Horizontal::Left,
                alignment::Vertical::Bottom,
            ));
        }

        vec![frame.into_geometry()]
    }
}
