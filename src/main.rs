fn main() {
    if let Err(err) = kpi_tree_renderer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
