use used_car_analyzer::{
    domain::{
        compute_profit, market_overview, profit::suggested_buy_price, valuate, MarginClass,
        TitleStatus, ValuationInput, VehicleType,
    },
    infra::load_embedded,
};

#[test]
fn test_region_multipliers_match_reference_tables() {
    let data = load_embedded().unwrap();

    assert_eq!(
        data.regions.resolve("California rules").multipliers,
        vec![0.8, 0.8, 0.7, 0.8, 0.9, 1.3, 1.3, 1.1, 1.0, 1.1, 1.2, 1.2, 1.2, 0.9]
    );
    assert_eq!(
        data.regions.resolve("Dallas, Texas").multipliers,
        vec![1.3, 1.2, 1.2, 1.1, 1.1, 0.9, 0.9, 1.0, 1.0, 0.9, 0.8, 0.8, 0.8, 0.9]
    );
    assert_eq!(
        data.regions.resolve("Florida").multipliers,
        vec![1.2, 1.1, 1.1, 1.0, 1.0, 1.1, 1.0, 1.1, 1.0, 1.0, 0.9, 0.9, 0.9, 0.9]
    );

    let national = data.regions.resolve("unknown place");
    assert_eq!(national.name, "National");
    assert!(national.multipliers.iter().all(|m| *m == 1.0));
    assert_eq!(national.multipliers.len(), 14);
}

#[test]
fn test_california_suv_ranking() {
    let data = load_embedded().unwrap();
    let profile = data.regions.resolve("los angeles, ca");
    let overview = market_overview(&data.catalog, profile, Some(VehicleType::Suv));

    let ranked: Vec<_> = overview
        .rows
        .iter()
        .map(|row| (row.record.full_name.as_str(), row.estimated_sales))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("Toyota RAV4", 494000),
            ("Honda CR-V", 455000),
            ("Chevrolet Equinox", 363000),
            ("Nissan Rogue", 286000),
            ("Jeep Grand Cherokee", 280000),
        ]
    );
}

#[test]
fn test_national_ranking_is_by_sales() {
    let data = load_embedded().unwrap();
    let overview = market_overview(&data.catalog, data.regions.national(), None);
    assert_eq!(overview.rows.len(), 14);
    assert_eq!(overview.top(1)[0].record.full_name, "Ford F-150");
    assert!(overview
        .rows
        .windows(2)
        .all(|pair| pair[0].estimated_sales >= pair[1].estimated_sales));
}

#[test]
fn test_brand_new_zero_mile_vehicles_keep_base_price() {
    let data = load_embedded().unwrap();
    let input = ValuationInput::new(2025, 0, TitleStatus::Clean).unwrap();
    for record in data.catalog.records() {
        let result = valuate(record, &input);
        assert_eq!(result.dep_factor, 1.0);
        assert!(result.mile_factor >= 1.0);
        assert!(result.estimated_value >= record.base_price);
    }
}

#[test]
fn test_value_then_profit_round_trip() {
    let data = load_embedded().unwrap();
    let record = data.catalog.get_record("Ford F-150").unwrap();
    let input = ValuationInput::new(2023, 50000, TitleStatus::Clean).unwrap();

    let result = valuate(record, &input);
    assert_eq!(result.estimated_value, 13680);
    assert_eq!(result.estimated_days_to_sell, 32);

    let buy = suggested_buy_price(result.estimated_value);
    assert_eq!(buy, 11628);
    let profit = compute_profit(buy, result.estimated_value, 5);
    assert_eq!(profit.gross_profit, 2052);
    assert_eq!(profit.margin, MarginClass::Solid);
    assert_eq!(profit.monthly_profit, 10260);
    assert_eq!(profit.yearly_profit, 123120);
}

#[test]
fn test_salvage_title_on_every_record() {
    let data = load_embedded().unwrap();
    for record in data.catalog.records() {
        let clean = valuate(record, &ValuationInput::new(2019, 90000, TitleStatus::Clean).unwrap());
        let salvage = valuate(
            record,
            &ValuationInput::new(2019, 90000, TitleStatus::SalvageRebuilt).unwrap(),
        );
        assert_eq!(salvage.dep_factor, clean.dep_factor * 0.60);
        assert_eq!(salvage.days_adjustment, clean.days_adjustment + 20);
        assert!(salvage.estimated_value < clean.estimated_value);
    }
}
