use super::*;

const SAMPLE: &str = "\
id,name,price,oldprice,length,color,imageurl
1,Wig A,1500,2000,20,Blonde,http://x/a.jpg
2,Wig B,0,,,,
";

// -----------------------------------------------------------------------
// parse_catalog - document shape
// -----------------------------------------------------------------------

#[test]
fn empty_input_yields_no_products() {
    assert!(parse_catalog("").is_empty());
    assert!(parse_catalog("  \n\n \r\n").is_empty());
}

#[test]
fn header_only_yields_no_products() {
    assert!(parse_catalog("id,name,price\n").is_empty());
}

#[test]
fn one_record_per_non_empty_data_line() {
    let text = "name,price\nA,1\n\n   \nB,2\r\nC,3\n";
    let products = parse_catalog(text);
    assert_eq!(products.len(), 3);
    assert_eq!(products[2].name, "C");
}

#[test]
fn unrecognised_header_yields_no_products() {
    let (products, stats) = parse_catalog_with_stats("foo,bar\n1,2\n");
    assert!(products.is_empty());
    assert!(!stats.columns_recognised);
}

// -----------------------------------------------------------------------
// parse_catalog - end-to-end record normalization
// -----------------------------------------------------------------------

#[test]
fn sample_first_record_is_fully_populated() {
    let products = parse_catalog(SAMPLE);
    assert_eq!(products.len(), 2);

    let a = &products[0];
    assert_eq!(a.id, ProductId(1));
    assert_eq!(a.name, "Wig A");
    assert!((a.price - 1500.0).abs() < f64::EPSILON);
    assert!((a.old_price - 2000.0).abs() < f64::EPSILON);
    assert!((a.length - 20.0).abs() < f64::EPSILON);
    assert_eq!(a.color, "Blonde");
    assert_eq!(a.image_url, "http://x/a.jpg");
    assert!(a.has_discount());
}

#[test]
fn sample_second_record_degrades_to_defaults() {
    let products = parse_catalog(SAMPLE);
    let b = &products[1];
    assert_eq!(b.id, ProductId(2));
    assert_eq!(b.name, "Wig B");
    assert!(b.price.abs() < f64::EPSILON);
    assert!(b.old_price.abs() < f64::EPSILON);
    assert!(b.length.abs() < f64::EPSILON);
    assert_eq!(b.color, COLOR_PLACEHOLDER);
    assert_eq!(b.image_url, "");
    assert!(!b.has_discount());
}

#[test]
fn unparseable_price_becomes_zero() {
    let products = parse_catalog("name,price\nWig,abc\n");
    assert_eq!(products.len(), 1);
    assert!(products[0].price.abs() < f64::EPSILON);
}

#[test]
fn blank_name_gets_placeholder() {
    let products = parse_catalog("name,price\n  ,100\n");
    assert_eq!(products[0].name, NAME_PLACEHOLDER);
}

#[test]
fn quoted_fields_keep_embedded_commas() {
    let products = parse_catalog("name,price,color\n\"Wig, long\",1500,\"Dark, ash\"\n");
    assert_eq!(products[0].name, "Wig, long");
    assert_eq!(products[0].color, "Dark, ash");
}

#[test]
fn columns_are_located_by_header_name() {
    let products = parse_catalog("color,price,name\nRed,900,Wig\n");
    assert_eq!(products[0].name, "Wig");
    assert_eq!(products[0].color, "Red");
    assert!((products[0].price - 900.0).abs() < f64::EPSILON);
}

#[test]
fn russian_headers_are_accepted() {
    let products = parse_catalog("Название,Цена,Длина,Цвет\nПарик,2500,40,Блонд\n");
    assert_eq!(products[0].name, "Парик");
    assert!((products[0].price - 2500.0).abs() < f64::EPSILON);
    assert!((products[0].length - 40.0).abs() < f64::EPSILON);
    assert_eq!(products[0].color, "Блонд");
}

#[test]
fn image_column_falls_back_to_image() {
    let products = parse_catalog("name,image\nWig,http://x/b.jpg\n");
    assert_eq!(products[0].image_url, "http://x/b.jpg");
}

// -----------------------------------------------------------------------
// parse_catalog - mismatched rows are zipped
// -----------------------------------------------------------------------

#[test]
fn short_row_reads_missing_cells_as_empty() {
    let (products, stats) = parse_catalog_with_stats("name,price,color\nWig,700\n");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].color, COLOR_PLACEHOLDER);
    assert!((products[0].price - 700.0).abs() < f64::EPSILON);
    assert_eq!(stats.mismatched_rows, 1);
}

#[test]
fn long_row_ignores_surplus_cells() {
    let (products, stats) = parse_catalog_with_stats("name,price\nWig,700,extra,more\n");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Wig");
    assert_eq!(stats.mismatched_rows, 1);
    assert_eq!(stats.data_rows, 1);
}

// -----------------------------------------------------------------------
// parse_catalog - ids
// -----------------------------------------------------------------------

#[test]
fn blank_id_falls_back_to_row_index() {
    let products = parse_catalog("id,name\n,A\n,B\n");
    assert_eq!(products[0].id, ProductId(1));
    assert_eq!(products[1].id, ProductId(2));
}

#[test]
fn missing_id_column_uses_row_index() {
    let products = parse_catalog("name\nA\nB\nC\n");
    let ids: Vec<_> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![ProductId(1), ProductId(2), ProductId(3)]);
}

#[test]
fn duplicate_ids_are_made_unique() {
    let (products, stats) = parse_catalog_with_stats("id,name\n5,A\n5,B\n2,C\n");
    assert_eq!(products[0].id, ProductId(5));
    assert_eq!(products[1].id, ProductId(2));
    // Row 3 asked for 2, which row 2 already took; row index 3 is free.
    assert_eq!(products[2].id, ProductId(3));
    assert_eq!(stats.reassigned_ids, 2);

    let unique: HashSet<_> = products.iter().map(|p| p.id).collect();
    assert_eq!(unique.len(), products.len());
}
