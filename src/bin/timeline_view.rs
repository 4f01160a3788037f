use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use timeline_view::{
    EdgeInsets, FrameRGBA, Orientation, RenderSettings, RowPosition, TimelineStyle, TimelineView,
    rasterize,
};

#[derive(Parser, Debug)]
#[command(name = "timeline-view", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the computed layout rectangles as JSON.
    Layout(LayoutArgs),
    /// Render a single timeline row as a PNG.
    Row(RowArgs),
    /// Render a whole list of rows stacked along the timeline axis as a PNG.
    Strip(StripArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input style JSON; defaults apply when omitted.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Widget box width in pixels.
    #[arg(long)]
    width: i32,

    /// Widget box height in pixels.
    #[arg(long)]
    height: i32,

    /// Uniform widget padding in pixels.
    #[arg(long, default_value_t = 0)]
    padding: i32,

    /// Row index within the list (0-based).
    #[arg(long, default_value_t = 0)]
    position: usize,

    /// Total number of rows in the list.
    #[arg(long, default_value_t = 1)]
    count: usize,
}

#[derive(Parser, Debug)]
struct RowArgs {
    /// Input style JSON; defaults apply when omitted.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Widget box width in pixels.
    #[arg(long)]
    width: i32,

    /// Widget box height in pixels.
    #[arg(long)]
    height: i32,

    /// Uniform widget padding in pixels.
    #[arg(long, default_value_t = 0)]
    padding: i32,

    /// Row index within the list (0-based).
    #[arg(long, default_value_t = 0)]
    position: usize,

    /// Total number of rows in the list.
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct StripArgs {
    /// Input style JSON; defaults apply when omitted.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Number of rows to render.
    #[arg(long)]
    rows: usize,

    /// Box width of each row in pixels.
    #[arg(long)]
    row_width: i32,

    /// Box height of each row in pixels.
    #[arg(long)]
    row_height: i32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Row(args) => cmd_row(args),
        Command::Strip(args) => cmd_strip(args),
    }
}

fn read_style_json(path: Option<&Path>) -> anyhow::Result<TimelineStyle> {
    let Some(path) = path else {
        return Ok(TimelineStyle::default());
    };
    let f = File::open(path).with_context(|| format!("open style '{}'", path.display()))?;
    let r = BufReader::new(f);
    let style: TimelineStyle =
        serde_json::from_reader(r).with_context(|| "parse style JSON")?;
    Ok(style)
}

fn view_for_row(
    style: &TimelineStyle,
    width: i32,
    height: i32,
    padding: i32,
    position: usize,
    count: usize,
) -> TimelineView {
    let mut view = TimelineView::new(style.clone());
    view.set_padding(EdgeInsets::uniform(padding));
    view.on_size_changed(width, height);
    view.apply_row_position(RowPosition::classify(position, count));
    view
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let style = read_style_json(args.style.as_deref())?;
    style.validate()?;

    let view = view_for_row(
        &style,
        args.width,
        args.height,
        args.padding,
        args.position,
        args.count,
    );

    let json = serde_json::to_string_pretty(view.layout())
        .with_context(|| "serialize layout JSON")?;
    println!("{json}");
    Ok(())
}

fn cmd_row(args: RowArgs) -> anyhow::Result<()> {
    let style = read_style_json(args.style.as_deref())?;
    style.validate()?;

    let view = view_for_row(
        &style,
        args.width,
        args.height,
        args.padding,
        args.position,
        args.count,
    );

    let settings = RenderSettings {
        clear_rgba: Some([255, 255, 255, 255]),
    };
    let frame = rasterize(&view, &settings)?;
    write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_strip(args: StripArgs) -> anyhow::Result<()> {
    let style = read_style_json(args.style.as_deref())?;
    style.validate()?;
    if args.rows == 0 {
        anyhow::bail!("strip needs at least one row");
    }

    let settings = RenderSettings {
        clear_rgba: Some([255, 255, 255, 255]),
    };

    let mut frames = Vec::with_capacity(args.rows);
    for position in 0..args.rows {
        let view = view_for_row(
            &style,
            args.row_width,
            args.row_height,
            0,
            position,
            args.rows,
        );
        frames.push(rasterize(&view, &settings)?);
    }

    let strip = stack_frames(&frames, style.orientation == Orientation::Horizontal)?;
    write_png(&args.out, &strip)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Stack per-row frames along the timeline axis into one image.
fn stack_frames(frames: &[FrameRGBA], horizontal: bool) -> anyhow::Result<FrameRGBA> {
    let row_w = frames[0].width as usize;
    let row_h = frames[0].height as usize;
    let n = frames.len();

    let (total_w, total_h) = if horizontal {
        (row_w * n, row_h)
    } else {
        (row_w, row_h * n)
    };

    let mut data = vec![0u8; total_w * total_h * 4];
    for (idx, frame) in frames.iter().enumerate() {
        anyhow::ensure!(
            frame.width as usize == row_w && frame.height as usize == row_h,
            "row frames must share one size"
        );
        for y in 0..row_h {
            let src = &frame.data[y * row_w * 4..(y + 1) * row_w * 4];
            let (dst_x, dst_y) = if horizontal {
                (idx * row_w, y)
            } else {
                (0, idx * row_h + y)
            };
            let dst_off = (dst_y * total_w + dst_x) * 4;
            data[dst_off..dst_off + row_w * 4].copy_from_slice(src);
        }
    }

    Ok(FrameRGBA {
        width: total_w as u32,
        height: total_h as u32,
        data,
        premultiplied: frames[0].premultiplied,
    })
}

fn write_png(out: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))
}
