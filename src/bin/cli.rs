//! RoadGraph CLI 工具
//!
//! 导入城市与道路后执行连通性、可达性、路线和最短路查询

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use roadgraph::cli::{resolve_city, CitySummary, PrintMode, Printer};
use roadgraph::{Graph, RoadNetwork};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "roadgraph-cli")]
#[command(about = "RoadGraph 城市路网分析工具", version)]
struct Args {
    /// 城市 CSV 文件（id,name）
    #[arg(short, long, requires = "roads", conflicts_with = "network")]
    cities: Option<PathBuf>,

    /// 道路 CSV 文件（origin,destination,distance[,bidirectional]）
    #[arg(short, long, requires = "cities")]
    roads: Option<PathBuf>,

    /// JSON 路网文件（{"cities": [...], "roads": [...]}）
    #[arg(short, long)]
    network: Option<PathBuf>,

    /// 以 JSON 输出结果
    #[arg(long)]
    json: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 打印邻接矩阵
    Matrix,
    /// 检查图是否强连通
    Connected,
    /// 列出某城市可直接到达和无法直接到达的城市
    Reachable {
        /// 城市名称或 ID
        city: String,
        /// 同时列出经多段道路可达的城市
        #[arg(long)]
        transitive: bool,
    },
    /// 列出从某城市出发的全部路线
    Routes {
        /// 城市名称或 ID
        city: String,
    },
    /// 计算从某城市出发的最短距离
    Shortest {
        /// 城市名称或 ID
        city: String,
        /// 每个城市只显示最终距离
        #[arg(long)]
        final_only: bool,
    },
    /// 对某城市执行全部查询
    Summary {
        /// 城市名称或 ID
        city: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "roadgraph=debug" } else { "roadgraph=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_graph(args: &Args) -> anyhow::Result<Graph> {
    let (network, stats) = match (&args.cities, &args.roads, &args.network) {
        (Some(cities), Some(roads), None) => RoadNetwork::from_csv_files(cities, roads)
            .with_context(|| format!("导入失败: {:?} / {:?}", cities, roads))?,
        (None, None, Some(path)) => {
            RoadNetwork::from_json_file(path).with_context(|| format!("导入失败: {:?}", path))?
        }
        _ => bail!("需要 --cities 与 --roads，或 --network"),
    };

    info!(
        cities = stats.cities_imported,
        roads = stats.roads_imported,
        duration_ms = stats.duration_ms,
        "road network loaded"
    );

    Ok(network.into_graph()?)
}

fn run(graph: &Graph, command: &Command, printer: &Printer) -> anyhow::Result<()> {
    match command {
        Command::Matrix => {
            if printer.mode() == PrintMode::Table {
                print!("{}", printer.print_stats());
            }
            println!("{}", printer.print_matrix()?);
        }

        Command::Connected => {
            println!("{}", printer.print_connectivity(graph.is_connected())?);
        }

        Command::Reachable { city, transitive } => {
            let id = resolve_city(graph, city)?;
            let reachable = graph.reachable_vertices(id)?;
            let unreachable = graph.unreachable_vertices(id)?;
            let all = if *transitive {
                Some(graph.transitively_reachable(id)?)
            } else {
                None
            };
            println!(
                "{}",
                printer.print_reachability(&reachable, &unreachable, all.as_deref())?
            );
        }

        Command::Routes { city } => {
            let id = resolve_city(graph, city)?;
            let routes = graph.visit_all_roads_and_cities(id)?;
            println!("{}", printer.print_routes(&routes)?);
        }

        Command::Shortest { city, final_only } => {
            let id = resolve_city(graph, city)?;
            let paths = graph.shortest_paths_from_source(id)?;
            println!("{}", printer.print_shortest_paths(&paths, *final_only)?);
        }

        Command::Summary { city } => {
            let id = resolve_city(graph, city)?;
            let summary = CitySummary::collect(graph, id)?;
            println!("{}", printer.print_summary(&summary)?);
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let graph = load_graph(&args)?;
    let mode = if args.json {
        PrintMode::Json
    } else {
        PrintMode::Table
    };
    let printer = Printer::new(&graph, mode);

    run(&graph, &args.command, &printer)
}
