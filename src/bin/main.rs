use std::io;
use std::io::BufRead;
use std::process;

use stopwatch::Stopwatch;

use dense_paths::{calc_tree, GraphSpec, InputError, ShortestPathTree, MAX_NODES};

fn main() {
    // e.g. run like this:
    // printf '3\n3\n0 1 4\n1 2 2\n0 2 9\n0\n' | cargo run --release
    // the input is the number of vertices, the number of edges, one line per
    // edge and finally the source vertex
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let num_nodes_field = next_field(&mut lines);
    let num_edges_field = next_field(&mut lines);
    // how many edge lines to read next, capped at the most edges any valid
    // graph can have, invalid counts fail validation below either way
    let max_edges = (MAX_NODES * (MAX_NODES - 1) / 2) as i64;
    let num_edges = num_edges_field
        .parse::<i64>()
        .unwrap_or(0)
        .max(0)
        .min(max_edges);
    let mut edge_area = String::new();
    for _ in 0..num_edges {
        edge_area.push_str(&next_field(&mut lines));
        edge_area.push('\n');
    }
    let source_field = next_field(&mut lines);

    let spec =
        match GraphSpec::parse(&num_nodes_field, &num_edges_field, &source_field, &edge_area) {
            Ok(spec) => spec,
            Err(err) => fail(err),
        };
    let input = match spec.validate() {
        Ok(input) => input,
        Err(err) => fail(err),
    };
    let (graph, source) = input.into_parts();

    let mut time = Stopwatch::new();
    time.start();
    let tree = calc_tree(&graph, source);
    time.stop();

    print!("{}", tree.result_table());
    println!(
        "number of vertices ................ {}",
        graph.get_num_nodes()
    );
    println!(
        "number of edges ................... {}",
        graph.get_num_edges()
    );
    println!(
        "tree edges ........................ {}",
        format_tree_edges(&tree)
    );
    println!(
        "computation time .................. {} micros",
        time.elapsed().as_micros()
    );
}

/// The next non-blank line of the input, trimmed. At the end of the input
/// missing fields read as empty strings and fail the numeric checks later.
fn next_field(lines: &mut impl Iterator<Item = io::Result<String>>) -> String {
    for line in lines {
        let line = line.expect("failed to read from stdin");
        let line = line.trim().to_string();
        if !line.is_empty() {
            return line;
        }
    }
    String::new()
}

fn format_tree_edges(tree: &ShortestPathTree) -> String {
    let edges = tree.tree_edges();
    if edges.is_empty() {
        return "-".to_string();
    }
    edges
        .iter()
        .map(|(from, to)| format!("({} {})", from, to))
        .collect::<Vec<String>>()
        .join(" ")
}

fn fail(err: InputError) -> ! {
    eprintln!("invalid input: {}", err);
    process::exit(1);
}
