//! PictoConnection CLI - inspect the pictogram database and screen layouts

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pictoconnection::assets::{AssetResolver, DEFAULT_ASSET_DIRS};
use pictoconnection::config::{self, PictoConfig};
use pictoconnection::layout::{compute_grid, layout_grid, BreadcrumbItem, Point, Rect, Size};
use pictoconnection::label::label_text;
use pictoconnection::palette::{Theme, SETTINGS_BUTTON_BACKGROUND};
use pictoconnection::plan::{ContentLayout, PlanOptions, ScreenPlan, TILE_ASPECT_RATIO};
use pictoconnection::ui::{self, term_theme, Icons, PictogramRow};
use pictoconnection::{BreadcrumbPath, PictogramRepository, PictogramStore, Screen};

#[derive(Parser)]
#[command(name = "pictoconnection")]
#[command(version)]
#[command(about = "PictoConnection - browse pictogram hierarchies and their screen layouts")]
#[command(long_about = r#"
PictoConnection stores pictograms (images with sounds) in a hierarchy and
lays them out as grids the user drills down through.

Example usage:
  pictoconnection init
  pictoconnection install
  pictoconnection children --id picto_connection
  pictoconnection screen --path picto_connection,animals --width 1024 --height 768
  pictoconnection grid --count 7 --width 1024 --height 600
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Open this database directly instead of installing the bundled snapshot
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Locale used to resolve pictograms (defaults to the config's)
    #[arg(short, long, global = true)]
    locale: Option<String>,

    /// Print JSON instead of human-readable output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Copy the bundled database into the data directory
    Install {
        /// Keep an existing installed copy
        #[arg(long)]
        keep: bool,
    },

    /// Show one pictogram
    Show {
        /// Pictogram identifier
        #[arg(short, long)]
        id: String,
    },

    /// List the children of a pictogram
    Children {
        /// Parent identifier
        #[arg(short, long, default_value = pictoconnection::ROOT_ID)]
        id: String,
    },

    /// Compute the grid for a number of items
    Grid {
        /// Number of items
        #[arg(short = 'n', long)]
        count: usize,

        #[arg(long, default_value = "1024")]
        width: f32,

        #[arg(long, default_value = "600")]
        height: f32,

        /// Item height / width
        #[arg(long, default_value = "1.0")]
        ratio: f32,

        /// Spacing between items (defaults to 2% of the longer side)
        #[arg(long)]
        margin: Option<f32>,
    },

    /// Plan the screen shown for a navigation path
    Screen {
        /// Comma-separated identifiers from the root
        #[arg(short, long, value_delimiter = ',', default_value = pictoconnection::ROOT_ID)]
        path: Vec<String>,

        #[arg(long, default_value = "1024")]
        width: f32,

        #[arg(long, default_value = "768")]
        height: f32,
    },

    /// List the color themes
    Themes,

    /// Select a color theme and save it in the config
    SelectTheme {
        /// Theme number
        id: u32,
    },

    /// Turn capital-letter labels on or off
    Capitals {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },

    /// Show statistics about the database
    Stats,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let mut config = config::load_config(Some(config_path.as_path()))?.unwrap_or_default();
    let locale = cli.locale.clone().unwrap_or_else(|| config.locale().to_string());

    match cli.command {
        Commands::Init { force } => {
            let config = PictoConfig {
                asset_dirs: DEFAULT_ASSET_DIRS.iter().map(|d| d.to_string()).collect(),
                ..Default::default()
            };
            config::write_config(&config_path, &config, force)?;
            ui::success(&format!("Wrote {}", config_path.display()));
        }

        Commands::Install { keep } => {
            let installed = PictogramStore::install_snapshot(
                &config.bundled_database(),
                &config.data_dir(),
                !keep,
            )?;
            ui::success(&format!("{} Database installed at {}", Icons::DATABASE, installed.display()));
        }

        Commands::Show { id } => {
            let repo = open_repository(&config, cli.database.as_deref())?;
            let record = repo.require_pictogram(&id, &locale)?;
            let resolver = asset_resolver(&config);
            let assets = resolver.resolve_record(&record);
            let children = repo.count_children(&id);

            if cli.json {
                let data = serde_json::json!({
                    "pictogram": record,
                    "assets": assets,
                    "children": children,
                });
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                ui::header(Icons::PICTURE, &label_text(&record.name, config.settings.use_capitals));
                ui::summary_row("id", &record.id);
                ui::summary_row("locale", if record.locale.is_empty() { "(default)" } else { record.locale.as_str() });
                ui::summary_row("image", &assets.image.display().to_string());
                ui::summary_row("sound", &assets.sound.display().to_string());
                if let Some(thumb) = &assets.thumb {
                    ui::summary_row("thumb", &thumb.display().to_string());
                }
                ui::summary_row("children", &children.to_string());
            }
            close_repository(repo)?;
        }

        Commands::Children { id } => {
            let repo = open_repository(&config, cli.database.as_deref())?;
            let children = repo.get_children(&id, &locale);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&children)?);
            } else if children.is_empty() {
                ui::info("No children", &format!("{} is a leaf", id));
            } else {
                let rows: Vec<PictogramRow> = children
                    .iter()
                    .map(|c| PictogramRow::new(c, label_text(&c.name, config.settings.use_capitals), repo.count_children(&c.id)))
                    .collect();
                ui::header(Icons::GRID, &format!("Children of {} ({})", id, children.len()));
                println!("{}", ui::pictogram_table(&rows));
            }
            close_repository(repo)?;
        }

        Commands::Grid { count, width, height, ratio, margin } => {
            if count == 0 {
                anyhow::bail!("--count must be at least 1");
            }
            let area = Size::new(width, height);
            let margin = margin.unwrap_or(0.02 * area.max_side());
            let layout = layout_grid(count, Rect::new(Point::default(), area), ratio, margin);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                let shape = compute_grid(count, area, ratio, margin);
                ui::header(Icons::GRID, &format!("{} items in {}x{}", count, width, height));
                ui::summary_row("rows", &shape.rows.to_string());
                ui::summary_row("cols", &shape.cols.to_string());
                ui::summary_row("compactness", &format!("{:.2}", shape.compactness(count)));
                ui::summary_row("item", &format!("{:.1} x {:.1}", layout.item_size.width, layout.item_size.height));
                for (i, cell) in layout.cells.iter().enumerate() {
                    println!("  {} ({:.1}, {:.1})", ui::muted(&format!("#{}", i + 1)), cell.x, cell.y);
                }
            }
        }

        Commands::Screen { path, width, height } => {
            let path = BreadcrumbPath::from_ids(path)
                .ok_or_else(|| anyhow::anyhow!("--path needs at least one identifier"))?;
            let repo = open_repository(&config, cli.database.as_deref())?;

            let screen = if path.is_root() || repo.has_children(path.current()) {
                Screen::Grid(path)
            } else {
                Screen::Gallery(path)
            };
            let options = PlanOptions {
                origin: Point::default(),
                visible: Size::new(width, height),
                use_capitals: config.settings.use_capitals,
            };
            let plan = ScreenPlan::build(&screen, &repo, &locale, options);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan(&plan);
            }
            close_repository(repo)?;
        }

        Commands::Themes => {
            if cli.json {
                let themes: Vec<_> = Theme::all()
                    .iter()
                    .map(|t| serde_json::json!({ "id": t.id, "name": t.name, "palette": t.palette }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&themes)?);
            } else {
                for theme in Theme::all() {
                    let marker = if theme.id == config.settings.selected_theme { "*" } else { " " };
                    ui::section(&format!("{} {} {}", marker, theme.id, theme.name));
                    for (name, color) in theme.palette.entries() {
                        ui::summary_row(&format!("{:<20}", name), &ui::swatch(color));
                    }
                }
                println!();
                ui::summary_row("settings button", &ui::swatch(SETTINGS_BUTTON_BACKGROUND));
            }
        }

        Commands::SelectTheme { id } => {
            let theme = Theme::by_id(id)?;
            config.settings.select_theme(&theme);
            config::write_config(&config_path, &config, true)?;
            ui::success(&format!("{} Selected theme {} ({})", Icons::PALETTE, theme.id, theme.name));
        }

        Commands::Capitals { enabled } => {
            config.settings.use_capitals = enabled;
            config::write_config(&config_path, &config, true)?;
            ui::success(&format!("Capital letters {}", if enabled { "on" } else { "off" }));
        }

        Commands::Stats => {
            let repo = open_repository(&config, cli.database.as_deref())?;
            let stats = repo.store().stats()?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                ui::header(Icons::STATS, "PictoConnection Statistics");
                println!("{}", stats);
            }
            close_repository(repo)?;
        }
    }

    Ok(())
}

/// Open the store the way the app does at launch: install the bundled
/// snapshot (unless the config keeps an existing copy), then open it.
fn open_repository(config: &PictoConfig, database: Option<&Path>) -> anyhow::Result<PictogramRepository> {
    let path = match database {
        Some(path) => path.to_path_buf(),
        None => {
            let installed = config.database_path();
            if config.refresh_on_launch() || !installed.exists() {
                PictogramStore::install_snapshot(&config.bundled_database(), &config.data_dir(), true)?
            } else {
                installed
            }
        }
    };

    let store = PictogramStore::open(&path)?;
    Ok(PictogramRepository::new(store))
}

fn close_repository(repo: PictogramRepository) -> anyhow::Result<()> {
    repo.into_store().close()?;
    Ok(())
}

fn asset_resolver(config: &PictoConfig) -> AssetResolver {
    if config.asset_dirs.is_empty() {
        AssetResolver::with_defaults(Path::new("."))
    } else {
        AssetResolver::new(config.asset_dirs.iter().map(PathBuf::from))
    }
}

fn print_plan(plan: &ScreenPlan) {
    let kind = match &plan.screen {
        Screen::Grid(_) => "Grid",
        Screen::Gallery(_) => "Gallery",
    };
    ui::header(Icons::HOME, &format!("{} {}", kind, plan.screen.path()));

    ui::section("Navigation bar");
    let mut crumbs = vec![Icons::HOME.to_string()];
    for item in &plan.breadcrumbs.items {
        let text = match item {
            BreadcrumbItem::Ellipsis { .. } => Icons::ELLIPSIS.to_string(),
            BreadcrumbItem::Entry { id, .. } => id.clone(),
        };
        if item.is_enabled() {
            crumbs.push(format!("{}[{}]", text, item.depth()));
        } else {
            crumbs.push(text.style(term_theme().disabled_crumb.clone()).to_string());
        }
    }
    println!("  {}", crumbs.join(&format!(" {} ", Icons::SEPARATOR)));

    ui::section("Content");
    match &plan.content {
        ContentLayout::Grid(grid) => {
            ui::summary_row("grid", &format!("{} x {}", grid.shape.rows, grid.shape.cols));
            ui::summary_row("tile", &format!("{:.1} x {:.1}", grid.item_size.width, grid.item_size.height));
        }
        ContentLayout::Gallery(gallery) => {
            ui::summary_row("tile", &format!("{:.1} x {:.1}", gallery.item_size.width, gallery.item_size.height));
        }
    }
    ui::summary_row("tile ratio", &format!("{:.1}", TILE_ASPECT_RATIO));

    for item in &plan.items {
        let marker = if item.has_children { Icons::GRID } else { Icons::SOUND };
        println!(
            "  {} {:<20} ({:.1}, {:.1}) {}",
            marker,
            item.label,
            item.center.x,
            item.center.y,
            ui::muted(&item.id)
        );
    }
    if plan.items.is_empty() {
        ui::warn("Nothing to show");
    }
}
