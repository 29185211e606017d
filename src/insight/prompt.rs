// src/insight/prompt.rs
use std::sync::Arc;

use crate::config::Product;

pub fn single_insight(product: &Product, context: &str) -> String {
    format!(
        "You are a product strategy expert. Analyze the following product data:\n\
         Name: {}\n\
         Description: {}\n\
         Metrics: {}\n\
         Domain: {}\n\
         \n\
         Context of analysis: {}\n\
         \n\
         Provide a professional, strategic insight about this product in 2-3 concise paragraphs. \
         Focus on differentiation and monetization potential.",
        product.name,
        product.description,
        product.metrics.to_json(),
        product.domain,
        context,
    )
}

pub fn comparison_insight(products: &[Arc<Product>]) -> String {
    let data = products
        .iter()
        .map(|p| format!("{}: {} (Metrics: {})", p.name, p.description, p.metrics.to_json()))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Perform a side-by-side strategic comparison of the following products:\n\n{}\n\n\
         Highlight the unique value proposition (UVP) of each, common market challenges, \
         and which product has the highest growth potential and why. \
         Use professional strategy consulting tone.",
        data
    )
}

pub fn ideation(query: &str) -> String {
    format!(
        "Analyze this product ideation request: \"{}\". \
         Provide a structured analysis of the market potential and directions.",
        query
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::CatalogFile;

    fn products() -> Vec<Arc<Product>> {
        CatalogFile::embedded()
            .unwrap()
            .products
            .into_iter()
            .map(Arc::new)
            .collect()
    }

    #[test]
    fn single_prompt_carries_product_fields_and_context() {
        let products = products();
        let prompt = single_insight(&products[1], "growth levers");
        assert!(prompt.contains("Name: FluxFlow"));
        assert!(prompt.contains("Domain: Cognitive Optimization"));
        assert!(prompt.contains(r#""differentiation":98"#));
        assert!(prompt.contains("Context of analysis: growth levers"));
    }

    #[test]
    fn comparison_prompt_lists_every_product() {
        let products = products();
        let prompt = comparison_insight(&products[..2]);
        assert!(prompt.contains("SerenityMind: Advanced neuro-linguistic"));
        assert!(prompt.contains("FluxFlow: Real-time focus"));
        assert!(!prompt.contains("NeoLocal"));
    }
}
