//! Tax-category resolution: explicit fee category, inherited product
//! category, source-specific defaults.

use rust_decimal_macros::dec;
use uuid::Uuid;

use fee_summary::catalog::models::{Enterprise, EnterpriseFee, FeeCategory, TaxCategory, Variant};
use fee_summary::catalog::repositories::Catalog;
use fee_summary::orders::models::Shipment;
use fee_summary::reports::services::{TaxCategoryResolver, SHIPPING_TAX_RATE_LABEL};

struct Fixture {
    catalog: Catalog,
    variant_id: Uuid,
    bare_variant_id: Uuid,
    shipping_tax_id: Uuid,
}

fn build_fixture() -> Fixture {
    let enterprise = Enterprise::new("Sample Producer");
    let fee_tax = TaxCategory::new("Sample Producer Tax");
    let product_tax = TaxCategory::new("Sample Product Tax");
    let shipping_tax = TaxCategory::new("Sample Shipping Tax");

    let variant = Variant::new(Some(product_tax.id));
    let bare_variant = Variant::new(None);

    Fixture {
        variant_id: variant.id,
        bare_variant_id: bare_variant.id,
        shipping_tax_id: shipping_tax.id,
        catalog: Catalog::new(
            vec![enterprise],
            vec![],
            vec![fee_tax, product_tax, shipping_tax],
            vec![variant, bare_variant],
            vec![],
            vec![],
        ),
    }
}

#[test]
fn test_explicit_fee_tax_category_wins() {
    let enterprise = Enterprise::new("Sample Producer");
    let fee_tax = TaxCategory::new("Sample Producer Tax");
    let product_tax = TaxCategory::new("Sample Product Tax");
    let variant = Variant::new(Some(product_tax.id));
    let variant_id = variant.id;

    let fee = EnterpriseFee::new(enterprise.id, "Fee", FeeCategory::Sales)
        .with_tax_category(fee_tax.id)
        .with_inherited_tax_category();

    let catalog = Catalog::new(
        vec![enterprise],
        vec![fee.clone()],
        vec![fee_tax, product_tax],
        vec![variant],
        vec![],
        vec![],
    );
    let resolver = TaxCategoryResolver::new(&catalog);

    // Explicit category outranks inheritance even when both are set
    assert_eq!(
        resolver.resolve_enterprise_fee(&fee, Some(variant_id)),
        Some("Sample Producer Tax".to_string())
    );
}

#[test]
fn test_inheriting_fee_uses_product_tax_category() {
    let fixture = build_fixture();
    let resolver = TaxCategoryResolver::new(&fixture.catalog);

    let fee = EnterpriseFee::new(Uuid::new_v4(), "Fee", FeeCategory::Sales)
        .with_inherited_tax_category();

    assert_eq!(
        resolver.resolve_enterprise_fee(&fee, Some(fixture.variant_id)),
        Some("Sample Product Tax".to_string())
    );
}

#[test]
fn test_inheriting_fee_with_untaxed_product_is_absent() {
    let fixture = build_fixture();
    let resolver = TaxCategoryResolver::new(&fixture.catalog);

    let fee = EnterpriseFee::new(Uuid::new_v4(), "Fee", FeeCategory::Sales)
        .with_inherited_tax_category();

    assert_eq!(
        resolver.resolve_enterprise_fee(&fee, Some(fixture.bare_variant_id)),
        None
    );
}

#[test]
fn test_fee_without_tax_configuration_is_absent() {
    let fixture = build_fixture();
    let resolver = TaxCategoryResolver::new(&fixture.catalog);

    let fee = EnterpriseFee::new(Uuid::new_v4(), "Fee", FeeCategory::Admin);

    assert_eq!(
        resolver.resolve_enterprise_fee(&fee, Some(fixture.variant_id)),
        None
    );
}

#[test]
fn test_inheriting_fee_without_variant_is_absent() {
    let fixture = build_fixture();
    let resolver = TaxCategoryResolver::new(&fixture.catalog);

    let fee = EnterpriseFee::new(Uuid::new_v4(), "Fee", FeeCategory::Sales)
        .with_inherited_tax_category();

    assert_eq!(resolver.resolve_enterprise_fee(&fee, None), None);
}

#[test]
fn test_shipment_uses_explicit_method_category() {
    let fixture = build_fixture();
    let resolver = TaxCategoryResolver::new(&fixture.catalog);

    let shipment = Shipment::new("Sample Shipping Method", dec!(1.00))
        .with_tax_category(fixture.shipping_tax_id);

    assert_eq!(resolver.resolve_shipment(&shipment), "Sample Shipping Tax");
}

#[test]
fn test_shipment_defaults_to_platform_rate() {
    let fixture = build_fixture();
    let resolver = TaxCategoryResolver::new(&fixture.catalog);

    let shipment = Shipment::new("Sample Shipping Method", dec!(1.00));

    assert_eq!(resolver.resolve_shipment(&shipment), SHIPPING_TAX_RATE_LABEL);
    assert_eq!(resolver.resolve_shipment(&shipment), "Platform Rate");
}
