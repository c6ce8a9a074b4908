use clap::{Parser, ValueEnum};
use log::LevelFilter;
use tinyray_renderer::{Camera, Color, RenderConfig};

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Render the demo scene to a PNG file
#[derive(Debug, Parser)]
#[command(name = "tinyray")]
#[command(about = "A tiny Whitted-style ray tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    pub fov: f32,

    /// Maximum reflection/refraction bounces
    #[arg(long, default_value_t = 4)]
    pub max_depth: u32,

    /// Background color as "r,g,b" in linear 0-1 units
    #[arg(long, default_value = "0.2,0.7,0.8", value_parser = parse_color)]
    pub background: Color,

    /// Leave out the checkerboard floor
    #[arg(long)]
    pub no_floor: bool,

    /// Output PNG path
    #[arg(short, long, default_value = "out.png")]
    pub output: String,

    /// Set the logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    pub fn camera(&self) -> Camera {
        Camera::new()
            .with_resolution(self.width, self.height)
            .with_fov(self.fov)
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            max_depth: self.max_depth,
            background: self.background,
            ..RenderConfig::default()
        }
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    let channels = s
        .split(',')
        .map(|c| c.trim().parse::<f32>().map_err(|e| format!("invalid channel {c:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    match channels[..] {
        [r, g, b] => Ok(Color::new(r, g, b)),
        _ => Err(format!("expected 3 comma-separated channels, got {}", channels.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["tinyray"]).unwrap();

        assert_eq!(args.width, 1024);
        assert_eq!(args.height, 768);
        assert_eq!(args.fov, 60.0);
        assert!(!args.no_floor);
        assert_eq!(args.output, "out.png");
        assert_eq!(args.log_level, LogLevel::Info);

        let config = args.render_config();
        let defaults = RenderConfig::default();
        assert_eq!(config.max_depth, defaults.max_depth);
        assert_eq!(config.background, defaults.background);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "tinyray",
            "--width",
            "320",
            "--height",
            "200",
            "--fov",
            "45",
            "--max-depth",
            "8",
            "--background",
            "0, 0, 0",
            "--no-floor",
            "-o",
            "render.png",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let camera = args.camera();
        assert_eq!((camera.image_width, camera.image_height), (320, 200));
        assert_eq!(camera.vfov(), 45.0);
        assert_eq!(args.render_config().max_depth, 8);
        assert_eq!(args.background, Color::ZERO);
        assert!(args.no_floor);
        assert_eq!(args.output, "render.png");
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("1,0.5,0"), Ok(Color::new(1.0, 0.5, 0.0)));
        assert!(parse_color("1,2").is_err());
        assert!(parse_color("1,2,3,4").is_err());
        assert!(parse_color("red,0,0").is_err());
    }

    #[test]
    fn test_rejects_bad_background() {
        assert!(Args::try_parse_from(["tinyray", "--background", "1,1"]).is_err());
    }
}
