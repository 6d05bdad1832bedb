//! Launch tracker terminal client

use clap::{Parser, Subcommand, ValueEnum};
use launch_tracker::{
    api::{LaunchApi, SpaceXClient},
    config::AppConfig,
    detail::LaunchDetail,
    errors::LaunchTrackerError,
    lifecycle::ViewLifetime,
    links::SystemOpener,
    list::LaunchList,
    location::FixedLocation,
    map::LaunchSiteMap,
    models::{Launch, UserLocation},
    navigation::{Navigator, Route},
    render,
};
use tokio::signal;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "launch-tracker", about = "Browse SpaceX launches")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List launches, newest first
    List {
        /// Number of pages to load
        #[arg(long, default_value_t = 1)]
        pages: u32,
        /// Case-insensitive filter on mission name
        #[arg(long)]
        search: Option<String>,
        /// Refresh after loading
        #[arg(long)]
        refresh: bool,
    },
    /// Show one launch and its launch site
    Detail {
        /// Position in the launch list, starting at 1
        index: usize,
        /// Open one of the launch links
        #[arg(long, value_enum)]
        open: Option<LinkTarget>,
    },
    /// Show the launch site of a launch and the distance to it
    Map {
        /// Position in the launch list, starting at 1
        index: usize,
        /// Your latitude, overrides the configured location
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Your longitude, overrides the configured location
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Open the map application with directions
        #[arg(long)]
        directions: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LinkTarget {
    Webcast,
    Wikipedia,
}

#[tokio::main]
async fn main() -> Result<(), LaunchTrackerError> {
    #[cfg(feature = "dotenv")]
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let api = SpaceXClient::new(&config.api)?;
    let lifetime = ViewLifetime::new();

    tokio::select! {
        result = run(cli.command, &config, &api, &lifetime) => {
            if let Err(e) = &result {
                error!("{}", e);
            }
            result?;
        }
        _ = signal::ctrl_c() => {
            info!("Received shutdown signal");
            lifetime.unmount();
        }
    }

    Ok(())
}

async fn run(
    command: Command,
    config: &AppConfig,
    api: &dyn LaunchApi,
    lifetime: &ViewLifetime,
) -> Result<(), LaunchTrackerError> {
    let mut navigator = Navigator::new();
    let mut list = LaunchList::new();

    match command {
        Command::List {
            pages,
            search,
            refresh,
        } => {
            list.load_initial(api, lifetime).await?;
            report_alert(list.take_alert());
            for _ in 1..pages {
                if list.end_of_collection() || list.error().is_some() {
                    break;
                }
                list.load_more(api, lifetime).await?;
            }
            if refresh {
                list.refresh(api, lifetime).await?;
            }
            if let Some(query) = search {
                list.set_query(query);
            }
            println!("{}", navigator.current().title());
            print!("{}", render::launch_list(&list));
        }
        Command::Detail { index, open } => {
            let launch = select_launch(&mut list, api, lifetime, index).await?;
            let mut detail = show_detail(&mut navigator, launch, api, lifetime).await?;
            match open {
                Some(LinkTarget::Webcast) => detail.open_webcast(&SystemOpener),
                Some(LinkTarget::Wikipedia) => detail.open_wikipedia(&SystemOpener),
                None => {}
            }
            report_alert(detail.take_alert());
        }
        Command::Map {
            index,
            lat,
            lon,
            directions,
        } => {
            let launch = select_launch(&mut list, api, lifetime, index).await?;
            let detail = show_detail(&mut navigator, launch, api, lifetime).await?;
            let launchpad = detail.require_launchpad()?.clone();
            navigator.push(Route::Map {
                launchpad: launchpad.clone(),
            })?;
            let mut map = LaunchSiteMap::new(launchpad);

            let location = match (lat, lon) {
                (Some(latitude), Some(longitude)) => Some(UserLocation {
                    latitude,
                    longitude,
                }),
                _ => config.location,
            };
            map.locate(&FixedLocation::new(location), lifetime).await?;

            println!("\n{}", navigator.current().title());
            print!("{}", render::launch_site_map(&map, config.debug));
            if directions {
                map.directions(&SystemOpener, config.platform);
                report_alert(map.take_alert());
            }
        }
    }

    Ok(())
}

/// Load pages until the launch at 1-based `index` is held
async fn select_launch(
    list: &mut LaunchList,
    api: &dyn LaunchApi,
    lifetime: &ViewLifetime,
    index: usize,
) -> Result<Launch, LaunchTrackerError> {
    list.load_initial(api, lifetime).await?;
    report_alert(list.take_alert());

    while list.launches().len() < index && !list.end_of_collection() && list.error().is_none() {
        list.load_more(api, lifetime).await?;
    }

    index
        .checked_sub(1)
        .and_then(|i| list.launches().get(i))
        .cloned()
        .ok_or(LaunchTrackerError::LaunchNotFound(index))
}

async fn show_detail(
    navigator: &mut Navigator,
    launch: Launch,
    api: &dyn LaunchApi,
    lifetime: &ViewLifetime,
) -> Result<LaunchDetail, LaunchTrackerError> {
    navigator.push(Route::LaunchDetail {
        launch: launch.clone(),
    })?;
    let mut detail = LaunchDetail::new(launch);
    detail.resolve(api, lifetime).await?;

    println!("{}", navigator.current().title());
    print!("{}", render::launch_detail(&detail));
    Ok(detail)
}

fn report_alert(alert: Option<String>) {
    if let Some(message) = alert {
        eprintln!("Error: {}", message);
    }
}
