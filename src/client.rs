use std::path::PathBuf;

use crate::algo::Algorithm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CommandLineConfig {
    pub graph: PathBuf,
    pub algorithm: Algorithm,
    pub start: String,
    pub end: String,
    pub format: OutputFormat,
    pub events: bool,
    pub verbose: bool,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut graph = None;
        let mut algorithm = Algorithm::Dijkstra;
        let mut start = None;
        let mut end = None;
        let mut format = OutputFormat::Text;
        let mut events = false;
        let mut verbose = false;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--graph" => {
                    graph = Some(PathBuf::from(value_for(&mut iter, "--graph")?));
                }
                "--algo" | "--algorithm" => {
                    algorithm = value_for(&mut iter, "--algo")?
                        .parse::<Algorithm>()
                        .map_err(|e| e.to_string())?;
                }
                "--start" => {
                    start = Some(value_for(&mut iter, "--start")?.to_string());
                }
                "--end" => {
                    end = Some(value_for(&mut iter, "--end")?.to_string());
                }
                "--format" => {
                    format = match value_for(&mut iter, "--format")? {
                        "text" => OutputFormat::Text,
                        "json" => OutputFormat::Json,
                        other => return Err(format!("unknown format {other}")),
                    };
                }
                "--events" => events = true,
                "--verbose" | "-v" => verbose = true,
                other => {
                    return Err(format!("unknown argument {other}"));
                }
            }
        }
        Ok(Self {
            graph: graph.ok_or_else(|| "--graph is required".to_string())?,
            algorithm,
            start: start.ok_or_else(|| "--start is required".to_string())?,
            end: end.ok_or_else(|| "--end is required".to_string())?,
            format,
            events,
            verbose,
        })
    }

    pub fn help() -> &'static str {
        "Usage: graphwalk --graph PATH --start ID --end ID [--algo DFS|BFS|Dijkstra|A*] \
         [--format text|json] [--events] [--verbose]\n"
    }
}

fn value_for<'a, 'b: 'a>(
    iter: &mut impl Iterator<Item = &'a &'b str>,
    flag: &str,
) -> Result<&'b str, String> {
    iter.next()
        .copied()
        .ok_or_else(|| format!("{flag} requires a value"))
}
