use crate::model::{ProductRecord, SearchResult};

const UNNAMED: &str = "Unnamed product";

pub fn format_search_results(result: &SearchResult) -> String {
    let mut out = String::new();

    let total_str = match result.count {
        Some(total) => format_number(total),
        None => "?".to_string(),
    };
    let showing = result.hits.len();
    out.push_str(&format!(
        "## Search results for \"{}\" (showing {} of {})\n\n",
        result.query, showing, total_str
    ));

    for (i, hit) in result.hits.iter().enumerate() {
        out.push_str(&format!("### {}. {}\n", i + 1, hit.name));
        out.push_str(&format!(
            "- **Brand:** {}\n",
            hit.brand.as_deref().unwrap_or("(unknown)")
        ));
        out.push_str(&format!("- **Barcode:** {}\n", hit.code));

        if i < result.hits.len() - 1 {
            out.push_str("\n---\n\n");
        }
    }

    out
}

pub fn format_product(product: &ProductRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# {}\n\n",
        product.name.as_deref().unwrap_or(UNNAMED)
    ));

    out.push_str("## Overview\n");
    out.push_str(&format!(
        "- **Brand:** {}\n",
        product.brand.as_deref().unwrap_or("(unknown)")
    ));
    if let Some(ref quantity) = product.quantity {
        out.push_str(&format!("- **Quantity:** {}\n", quantity));
    }
    out.push_str(&format!("- **Barcode:** {}\n", product.code));
    if let Some(ref image_url) = product.image_url {
        out.push_str(&format!("- **Image:** {}\n", image_url));
    }
    out.push('\n');

    let n = &product.nutriments;
    out.push_str("## Nutrition (quick view)\n");
    out.push_str(&format!(
        "| Calories (100g) | {} |\n",
        format_value(n.kcal_per_100g, 0, "kcal")
    ));
    out.push_str(&format!(
        "| Calories (per serving) | {} |\n",
        format_value(n.kcal_per_serving, 0, "kcal")
    ));
    out.push_str(&format!(
        "| Sugars (100g) | {} |\n",
        format_value(n.sugars_per_100g, 2, "g")
    ));
    out.push_str(&format!(
        "| Carbs (100g) | {} |\n",
        format_value(n.carbs_per_100g, 2, "g")
    ));
    out.push_str(&format!(
        "| Salt (100g) | {} |\n",
        format_value(n.salt_per_100g, 2, "g")
    ));
    out.push('\n');

    out
}

fn format_value(value: Option<f64>, decimals: usize, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.*} {}", decimals, v, unit),
        None => "—".to_string(),
    }
}

fn format_number(n: u32) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
