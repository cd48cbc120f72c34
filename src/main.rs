// ==========================================
// 车辆保养引擎 - 命令行入口
// ==========================================
// 用法: maintenance-hub <snapshot.json> [--now RFC3339] [--policy policy.json] [--log-json]
// 输出: 全局排序后的待办项（JSON,stdout）
// ==========================================

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};

use maintenance_hub::api::{FleetSnapshot, MaintenanceApi};
use maintenance_hub::config::PolicyLoader;
use maintenance_hub::logging;

const USAGE: &str =
    "usage: maintenance-hub <snapshot.json> [--now RFC3339] [--policy policy.json] [--log-json]";

struct CliArgs {
    snapshot: PathBuf,
    now: Option<DateTime<Utc>>,
    policy: Option<PathBuf>,
    log_json: bool,
}

fn parse_args() -> Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let mut snapshot = None;
    let mut now = None;
    let mut policy = None;
    let mut log_json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--now" => {
                let raw = args.next().context("--now 缺少参数")?;
                let parsed = DateTime::parse_from_rfc3339(&raw)
                    .with_context(|| format!("无法解析 --now: {}", raw))?;
                now = Some(parsed.with_timezone(&Utc));
            }
            "--policy" => {
                policy = Some(PathBuf::from(args.next().context("--policy 缺少参数")?));
            }
            "--log-json" => log_json = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other if other.starts_with("--") => bail!("未知参数: {}\n{}", other, USAGE),
            other => {
                if snapshot.replace(PathBuf::from(other)).is_some() {
                    bail!("只能指定一个快照文件\n{}", USAGE);
                }
            }
        }
    }

    let snapshot = snapshot.with_context(|| format!("缺少快照文件\n{}", USAGE))?;
    Ok(CliArgs {
        snapshot,
        now,
        policy,
        log_json,
    })
}

fn main() -> Result<()> {
    let args = parse_args()?;

    if args.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::info!("{} v{}", maintenance_hub::APP_NAME, maintenance_hub::VERSION);

    let loader = match &args.policy {
        Some(path) => PolicyLoader::new().with_path(path),
        None => PolicyLoader::new(),
    };
    let policy = loader.load().context("加载策略失败")?;

    let snapshot = FleetSnapshot::load_file(&args.snapshot)
        .with_context(|| format!("读取快照失败: {}", args.snapshot.display()))?;

    let now = args.now.unwrap_or_else(Utc::now);
    tracing::info!(now = %now, vehicles = snapshot.vehicles.len(), "开始判定");

    let items = MaintenanceApi::with_policy(policy).action_items(&snapshot, now);

    let output = serde_json::to_string_pretty(&items).context("序列化待办项失败")?;
    println!("{}", output);

    Ok(())
}
