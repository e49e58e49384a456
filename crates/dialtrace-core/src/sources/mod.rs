use dialtrace_source_api::SourceRegistry;

/// Registry holding every built-in source in pipeline order.
pub fn create_source_registry() -> SourceRegistry {
    let mut registry = SourceRegistry::new();

    dialtrace_source_htmlweb::register(&mut registry);
    dialtrace_source_numverify::register(&mut registry);
    dialtrace_source_ok::register(&mut registry);

    registry
}
