pub mod products;

use orderdb_kernel::ModuleRegistry;

/// Register all seed modules with the registry
pub fn register_all(registry: &mut ModuleRegistry) {
    registry.register(products::create_module());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_module_is_registered() {
        let mut registry = ModuleRegistry::new();
        register_all(&mut registry);

        assert_eq!(registry.module_count(), 1);
        assert!(registry.get_module("products").is_some());
    }
}
