pub mod authors;
pub mod books;
pub mod categories;
pub mod openapi;
pub mod tags;

use bookstore_kernel::ModuleRegistry;

/// Longest accepted value for any free-text field, in characters
pub const MAX_TEXT_LEN: usize = 212;

/// Register all catalog modules with the registry
pub fn register_all(registry: &mut ModuleRegistry) -> anyhow::Result<()> {
    registry.register(books::create_module())?;
    registry.register(tags::create_module())?;
    registry.register(categories::create_module())?;
    registry.register(authors::create_module())?;
    Ok(())
}

/// Registry holding every catalog module
pub fn registry() -> anyhow::Result<ModuleRegistry> {
    let mut registry = ModuleRegistry::new();
    register_all(&mut registry)?;
    Ok(registry)
}
