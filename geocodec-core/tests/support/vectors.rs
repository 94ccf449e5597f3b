/// Conformance vectors shared by the integration tests.
///
/// Every WKB/EWKB form is derived from the same geometry; the EWKB forms carry
/// SRID 4326. `wkb_reads_as` / `geojson_reads_as` hold the WKT a format reads
/// back to when it cannot represent the geometry exactly.
#[allow(dead_code)]
pub struct Vector {
    pub name: &'static str,
    pub wkt: &'static str,
    pub wkb: &'static str,
    pub wkb_xdr: &'static str,
    pub ewkb: &'static str,
    pub ewkb_xdr: &'static str,
    pub twkb: Option<&'static str>,
    pub geojson: &'static str,
    pub wkb_reads_as: Option<&'static str>,
    pub geojson_reads_as: Option<&'static str>,
}

pub const VECTORS: &[Vector] = &[
    Vector {
        name: "empty_point",
        wkt: "POINT EMPTY",
        wkb: "010400000000000000",
        wkb_xdr: "000000000400000000",
        ewkb: "0104000020e610000000000000",
        ewkb_xdr: "0020000004000010e600000000",
        twkb: Some("a110"),
        geojson: r#"{"type":"Point","coordinates":[]}"#,
        wkb_reads_as: Some("MULTIPOINT EMPTY"),
        geojson_reads_as: None,
    },
    Vector {
        name: "point",
        wkt: "POINT(1 2)",
        wkb: "0101000000000000000000f03f0000000000000040",
        wkb_xdr: "00000000013ff00000000000004000000000000000",
        ewkb: "0101000020e6100000000000000000f03f0000000000000040",
        ewkb_xdr: "0020000001000010e63ff00000000000004000000000000000",
        twkb: Some("a100c09a0c80b518"),
        geojson: r#"{"type":"Point","coordinates":[1,2]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "point_fractional",
        wkt: "POINT(1.5 -3.25)",
        wkb: "0101000000000000000000f83f0000000000000ac0",
        wkb_xdr: "00000000013ff8000000000000c00a000000000000",
        ewkb: "0101000020e6100000000000000000f83f0000000000000ac0",
        ewkb_xdr: "0020000001000010e63ff8000000000000c00a000000000000",
        twkb: Some("a100e0a7128fd627"),
        geojson: r#"{"type":"Point","coordinates":[1.5,-3.25]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "empty_line_string",
        wkt: "LINESTRING EMPTY",
        wkb: "010200000000000000",
        wkb_xdr: "000000000200000000",
        ewkb: "0102000020e610000000000000",
        ewkb_xdr: "0020000002000010e600000000",
        twkb: Some("a210"),
        geojson: r#"{"type":"LineString","coordinates":[]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "line_string",
        wkt: "LINESTRING(1 2,3 4)",
        wkb: concat!(
            "010200000002000000000000000000f03f00000000000000400000000000000840000000",
            "0000001040",
        ),
        wkb_xdr: concat!(
            "0000000002000000023ff000000000000040000000000000004008000000000000401000",
            "0000000000",
        ),
        ewkb: concat!(
            "0102000020e610000002000000000000000000f03f000000000000004000000000000008",
            "400000000000001040",
        ),
        ewkb_xdr: concat!(
            "0020000002000010e6000000023ff0000000000000400000000000000040080000000000",
            "004010000000000000",
        ),
        twkb: Some("a20002c09a0c80b51880b51880b518"),
        geojson: r#"{"type":"LineString","coordinates":[[1,2],[3,4]]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "empty_polygon",
        wkt: "POLYGON EMPTY",
        wkb: "010300000000000000",
        wkb_xdr: "000000000300000000",
        ewkb: "0103000020e610000000000000",
        ewkb_xdr: "0020000003000010e600000000",
        twkb: Some("a310"),
        geojson: r#"{"type":"Polygon","coordinates":[]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "polygon",
        wkt: "POLYGON((1 2,3 4,5 6,1 2))",
        wkb: concat!(
            "01030000000100000004000000000000000000f03f000000000000004000000000000008",
            "40000000000000104000000000000014400000000000001840000000000000f03f000000",
            "0000000040",
        ),
        wkb_xdr: concat!(
            "000000000300000001000000043ff0000000000000400000000000000040080000000000",
            "004010000000000000401400000000000040180000000000003ff0000000000000400000",
            "0000000000",
        ),
        ewkb: concat!(
            "0103000020e61000000100000004000000000000000000f03f0000000000000040000000",
            "0000000840000000000000104000000000000014400000000000001840000000000000f0",
            "3f0000000000000040",
        ),
        ewkb_xdr: concat!(
            "0020000003000010e600000001000000043ff00000000000004000000000000000400800",
            "00000000004010000000000000401400000000000040180000000000003ff00000000000",
            "004000000000000000",
        ),
        twkb: Some("a3000104c09a0c80b51880b51880b51880b51880b518ffe930ffe930"),
        geojson: r#"{"type":"Polygon","coordinates":[[[1,2],[3,4],[5,6],[1,2]]]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "polygon_with_one_interior_ring",
        wkt: "POLYGON((1 2,3 4,5 6,1 2),(11 12,13 14,15 16,11 12))",
        wkb: concat!(
            "01030000000200000004000000000000000000f03f000000000000004000000000000008",
            "40000000000000104000000000000014400000000000001840000000000000f03f000000",
            "000000004004000000000000000000264000000000000028400000000000002a40000000",
            "0000002c400000000000002e400000000000003040000000000000264000000000000028",
            "40",
        ),
        wkb_xdr: concat!(
            "000000000300000002000000043ff0000000000000400000000000000040080000000000",
            "004010000000000000401400000000000040180000000000003ff0000000000000400000",
            "00000000000000000440260000000000004028000000000000402a000000000000402c00",
            "0000000000402e0000000000004030000000000000402600000000000040280000000000",
            "00",
        ),
        ewkb: concat!(
            "0103000020e61000000200000004000000000000000000f03f0000000000000040000000",
            "0000000840000000000000104000000000000014400000000000001840000000000000f0",
            "3f000000000000004004000000000000000000264000000000000028400000000000002a",
            "400000000000002c400000000000002e4000000000000030400000000000002640000000",
            "0000002840",
        ),
        ewkb_xdr: concat!(
            "0020000003000010e600000002000000043ff00000000000004000000000000000400800",
            "00000000004010000000000000401400000000000040180000000000003ff00000000000",
            "0040000000000000000000000440260000000000004028000000000000402a0000000000",
            "00402c000000000000402e00000000000040300000000000004026000000000000402800",
            "0000000000",
        ),
        twkb: Some(concat!(
            "a3000204c09a0c80b51880b51880b51880b51880b518ffe930ffe9300480897a80897a80",
            "b51880b51880b51880b518ffe930ffe930",
        )),
        geojson: r#"{"type":"Polygon","coordinates":[[[1,2],[3,4],[5,6],[1,2]],[[11,12],[13,14],[15,16],[11,12]]]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "polygon_with_two_interior_rings",
        wkt: "POLYGON((1 2,3 4,5 6,1 2),(11 12,13 14,15 16,11 12),(21 22,23 24,25 26,21 22))",
        wkb: concat!(
            "01030000000300000004000000000000000000f03f000000000000004000000000000008",
            "40000000000000104000000000000014400000000000001840000000000000f03f000000",
            "000000004004000000000000000000264000000000000028400000000000002a40000000",
            "0000002c400000000000002e400000000000003040000000000000264000000000000028",
            "400400000000000000000035400000000000003640000000000000374000000000000038",
            "4000000000000039400000000000003a4000000000000035400000000000003640",
        ),
        wkb_xdr: concat!(
            "000000000300000003000000043ff0000000000000400000000000000040080000000000",
            "004010000000000000401400000000000040180000000000003ff0000000000000400000",
            "00000000000000000440260000000000004028000000000000402a000000000000402c00",
            "0000000000402e0000000000004030000000000000402600000000000040280000000000",
            "000000000440350000000000004036000000000000403700000000000040380000000000",
            "004039000000000000403a00000000000040350000000000004036000000000000",
        ),
        ewkb: concat!(
            "0103000020e61000000300000004000000000000000000f03f0000000000000040000000",
            "0000000840000000000000104000000000000014400000000000001840000000000000f0",
            "3f000000000000004004000000000000000000264000000000000028400000000000002a",
            "400000000000002c400000000000002e4000000000000030400000000000002640000000",
            "000000284004000000000000000000354000000000000036400000000000003740000000",
            "000000384000000000000039400000000000003a40000000000000354000000000000036",
            "40",
        ),
        ewkb_xdr: concat!(
            "0020000003000010e600000003000000043ff00000000000004000000000000000400800",
            "00000000004010000000000000401400000000000040180000000000003ff00000000000",
            "0040000000000000000000000440260000000000004028000000000000402a0000000000",
            "00402c000000000000402e00000000000040300000000000004026000000000000402800",
            "000000000000000004403500000000000040360000000000004037000000000000403800",
            "00000000004039000000000000403a000000000000403500000000000040360000000000",
            "00",
        ),
        twkb: Some(concat!(
            "a3000304c09a0c80b51880b51880b51880b51880b518ffe930ffe9300480897a80897a80",
            "b51880b51880b51880b518ffe930ffe9300480897a80897a80b51880b51880b51880b518",
            "ffe930ffe930",
        )),
        geojson: r#"{"type":"Polygon","coordinates":[[[1,2],[3,4],[5,6],[1,2]],[[11,12],[13,14],[15,16],[11,12]],[[21,22],[23,24],[25,26],[21,22]]]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "empty_multi_point",
        wkt: "MULTIPOINT EMPTY",
        wkb: "010400000000000000",
        wkb_xdr: "000000000400000000",
        ewkb: "0104000020e610000000000000",
        ewkb_xdr: "0020000004000010e600000000",
        twkb: Some("a410"),
        geojson: r#"{"type":"MultiPoint","coordinates":[]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "multi_point_with_one_point",
        wkt: "MULTIPOINT(1 2)",
        wkb: "0104000000010000000101000000000000000000f03f0000000000000040",
        wkb_xdr: "00000000040000000100000000013ff00000000000004000000000000000",
        ewkb: "0104000020e6100000010000000101000000000000000000f03f0000000000000040",
        ewkb_xdr: "0020000004000010e60000000100000000013ff00000000000004000000000000000",
        twkb: Some("a40001c09a0c80b518"),
        geojson: r#"{"type":"MultiPoint","coordinates":[[1,2]]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "multi_point_with_two_points",
        wkt: "MULTIPOINT(1 2,3 4)",
        wkb: concat!(
            "0104000000020000000101000000000000000000f03f0000000000000040010100000000",
            "000000000008400000000000001040",
        ),
        wkb_xdr: concat!(
            "00000000040000000200000000013ff00000000000004000000000000000000000000140",
            "080000000000004010000000000000",
        ),
        ewkb: concat!(
            "0104000020e6100000020000000101000000000000000000f03f00000000000000400101",
            "00000000000000000008400000000000001040",
        ),
        ewkb_xdr: concat!(
            "0020000004000010e60000000200000000013ff000000000000040000000000000000000",
            "00000140080000000000004010000000000000",
        ),
        twkb: Some("a40002c09a0c80b51880b51880b518"),
        geojson: r#"{"type":"MultiPoint","coordinates":[[1,2],[3,4]]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "empty_multi_line_string",
        wkt: "MULTILINESTRING EMPTY",
        wkb: "010500000000000000",
        wkb_xdr: "000000000500000000",
        ewkb: "0105000020e610000000000000",
        ewkb_xdr: "0020000005000010e600000000",
        twkb: Some("a510"),
        geojson: r#"{"type":"MultiLineString","coordinates":[]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "multi_line_string_with_one_line_string",
        wkt: "MULTILINESTRING((1 2,3 4))",
        wkb: concat!(
            "010500000001000000010200000002000000000000000000f03f00000000000000400000",
            "0000000008400000000000001040",
        ),
        wkb_xdr: concat!(
            "0000000005000000010000000002000000023ff000000000000040000000000000004008",
            "0000000000004010000000000000",
        ),
        ewkb: concat!(
            "0105000020e610000001000000010200000002000000000000000000f03f000000000000",
            "004000000000000008400000000000001040",
        ),
        ewkb_xdr: concat!(
            "0020000005000010e6000000010000000002000000023ff0000000000000400000000000",
            "000040080000000000004010000000000000",
        ),
        twkb: Some("a5000102c09a0c80b51880b51880b518"),
        geojson: r#"{"type":"MultiLineString","coordinates":[[[1,2],[3,4]]]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "multi_line_string_with_two_line_strings",
        wkt: "MULTILINESTRING((1 2,3 4),(5 6,7 8))",
        wkb: concat!(
            "010500000002000000010200000002000000000000000000f03f00000000000000400000",
            "000000000840000000000000104001020000000200000000000000000014400000000000",
            "0018400000000000001c400000000000002040",
        ),
        wkb_xdr: concat!(
            "0000000005000000020000000002000000023ff000000000000040000000000000004008",
            "000000000000401000000000000000000000020000000240140000000000004018000000",
            "000000401c0000000000004020000000000000",
        ),
        ewkb: concat!(
            "0105000020e610000002000000010200000002000000000000000000f03f000000000000",
            "004000000000000008400000000000001040010200000002000000000000000000144000",
            "000000000018400000000000001c400000000000002040",
        ),
        ewkb_xdr: concat!(
            "0020000005000010e6000000020000000002000000023ff0000000000000400000000000",
            "000040080000000000004010000000000000000000000200000002401400000000000040",
            "18000000000000401c0000000000004020000000000000",
        ),
        twkb: Some("a5000202c09a0c80b51880b51880b5180280b51880b51880b51880b518"),
        geojson: r#"{"type":"MultiLineString","coordinates":[[[1,2],[3,4]],[[5,6],[7,8]]]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "empty_multi_polygon",
        wkt: "MULTIPOLYGON EMPTY",
        wkb: "010600000000000000",
        wkb_xdr: "000000000600000000",
        ewkb: "0106000020e610000000000000",
        ewkb_xdr: "0020000006000010e600000000",
        twkb: Some("a610"),
        geojson: r#"{"type":"MultiPolygon","coordinates":[]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "multi_polygon_with_one_polygon",
        wkt: "MULTIPOLYGON(((1 2,3 4,5 6,1 2)))",
        wkb: concat!(
            "01060000000100000001030000000100000004000000000000000000f03f000000000000",
            "004000000000000008400000000000001040000000000000144000000000000018400000",
            "00000000f03f0000000000000040",
        ),
        wkb_xdr: concat!(
            "000000000600000001000000000300000001000000043ff0000000000000400000000000",
            "000040080000000000004010000000000000401400000000000040180000000000003ff0",
            "0000000000004000000000000000",
        ),
        ewkb: concat!(
            "0106000020e61000000100000001030000000100000004000000000000000000f03f0000",
            "000000000040000000000000084000000000000010400000000000001440000000000000",
            "1840000000000000f03f0000000000000040",
        ),
        ewkb_xdr: concat!(
            "0020000006000010e600000001000000000300000001000000043ff00000000000004000",
            "000000000000400800000000000040100000000000004014000000000000401800000000",
            "00003ff00000000000004000000000000000",
        ),
        twkb: Some("a600010104c09a0c80b51880b51880b51880b51880b518ffe930ffe930"),
        geojson: r#"{"type":"MultiPolygon","coordinates":[[[[1,2],[3,4],[5,6],[1,2]]]]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "multi_polygon_with_two_polygons",
        wkt: "MULTIPOLYGON(((1 2,3 4,5 6,1 2)),((1 2,3 4,5 6,1 2),(11 12,13 14,15 16,11 12),(21 22,23 24,25 26,21 22)))",
        wkb: concat!(
            "01060000000200000001030000000100000004000000000000000000f03f000000000000",
            "004000000000000008400000000000001040000000000000144000000000000018400000",
            "00000000f03f000000000000004001030000000300000004000000000000000000f03f00",
            "000000000000400000000000000840000000000000104000000000000014400000000000",
            "001840000000000000f03f00000000000000400400000000000000000026400000000000",
            "0028400000000000002a400000000000002c400000000000002e40000000000000304000",
            "000000000026400000000000002840040000000000000000003540000000000000364000",
            "00000000003740000000000000384000000000000039400000000000003a400000000000",
            "0035400000000000003640",
        ),
        wkb_xdr: concat!(
            "000000000600000002000000000300000001000000043ff0000000000000400000000000",
            "000040080000000000004010000000000000401400000000000040180000000000003ff0",
            "0000000000004000000000000000000000000300000003000000043ff000000000000040",
            "000000000000004008000000000000401000000000000040140000000000004018000000",
            "0000003ff000000000000040000000000000000000000440260000000000004028000000",
            "000000402a000000000000402c000000000000402e000000000000403000000000000040",
            "260000000000004028000000000000000000044035000000000000403600000000000040",
            "3700000000000040380000000000004039000000000000403a0000000000004035000000",
            "0000004036000000000000",
        ),
        ewkb: concat!(
            "0106000020e61000000200000001030000000100000004000000000000000000f03f0000",
            "000000000040000000000000084000000000000010400000000000001440000000000000",
            "1840000000000000f03f0000000000000040010300000003000000040000000000000000",
            "00f03f000000000000004000000000000008400000000000001040000000000000144000",
            "00000000001840000000000000f03f000000000000004004000000000000000000264000",
            "000000000028400000000000002a400000000000002c400000000000002e400000000000",
            "003040000000000000264000000000000028400400000000000000000035400000000000",
            "0036400000000000003740000000000000384000000000000039400000000000003a4000",
            "000000000035400000000000003640",
        ),
        ewkb_xdr: concat!(
            "0020000006000010e600000002000000000300000001000000043ff00000000000004000",
            "000000000000400800000000000040100000000000004014000000000000401800000000",
            "00003ff00000000000004000000000000000000000000300000003000000043ff0000000",
            "000000400000000000000040080000000000004010000000000000401400000000000040",
            "180000000000003ff0000000000000400000000000000000000004402600000000000040",
            "28000000000000402a000000000000402c000000000000402e0000000000004030000000",
            "000000402600000000000040280000000000000000000440350000000000004036000000",
            "000000403700000000000040380000000000004039000000000000403a00000000000040",
            "350000000000004036000000000000",
        ),
        twkb: Some(concat!(
            "a600020104c09a0c80b51880b51880b51880b51880b518ffe930ffe9300304000080b518",
            "80b51880b51880b518ffe930ffe9300480897a80897a80b51880b51880b51880b518ffe9",
            "30ffe9300480897a80897a80b51880b51880b51880b518ffe930ffe930",
        )),
        geojson: r#"{"type":"MultiPolygon","coordinates":[[[[1,2],[3,4],[5,6],[1,2]]],[[[1,2],[3,4],[5,6],[1,2]],[[11,12],[13,14],[15,16],[11,12]],[[21,22],[23,24],[25,26],[21,22]]]]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "empty_geometry_collection",
        wkt: "GEOMETRYCOLLECTION EMPTY",
        wkb: "010700000000000000",
        wkb_xdr: "000000000700000000",
        ewkb: "0107000020e610000000000000",
        ewkb_xdr: "0020000007000010e600000000",
        twkb: Some("a710"),
        geojson: r#"{"type":"GeometryCollection","geometries":[]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "geometry_collection_with_point",
        wkt: "GEOMETRYCOLLECTION(POINT(1 2))",
        wkb: "0107000000010000000101000000000000000000f03f0000000000000040",
        wkb_xdr: "00000000070000000100000000013ff00000000000004000000000000000",
        ewkb: "0107000020e6100000010000000101000000000000000000f03f0000000000000040",
        ewkb_xdr: "0020000007000010e60000000100000000013ff00000000000004000000000000000",
        twkb: Some("a70001a100c09a0c80b518"),
        geojson: r#"{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[1,2]}]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "geometry_collection_with_point_and_line_string",
        wkt: "GEOMETRYCOLLECTION(POINT(1 2),LINESTRING(1 2,3 4))",
        wkb: concat!(
            "0107000000020000000101000000000000000000f03f0000000000000040010200000002",
            "000000000000000000f03f000000000000004000000000000008400000000000001040",
        ),
        wkb_xdr: concat!(
            "00000000070000000200000000013ff00000000000004000000000000000000000000200",
            "0000023ff0000000000000400000000000000040080000000000004010000000000000",
        ),
        ewkb: concat!(
            "0107000020e6100000020000000101000000000000000000f03f00000000000000400102",
            "00000002000000000000000000f03f000000000000004000000000000008400000000000",
            "001040",
        ),
        ewkb_xdr: concat!(
            "0020000007000010e60000000200000000013ff000000000000040000000000000000000",
            "000002000000023ff0000000000000400000000000000040080000000000004010000000",
            "000000",
        ),
        twkb: Some("a70002a100c09a0c80b518a20002c09a0c80b51880b51880b518"),
        geojson: r#"{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[1,2]},{"type":"LineString","coordinates":[[1,2],[3,4]]}]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "geometry_collection_with_point_and_line_string_and_polygon",
        wkt: "GEOMETRYCOLLECTION(POINT(1 2),LINESTRING(1 2,3 4),POLYGON((1 2,3 4,5 6,1 2),(11 12,13 14,15 16,11 12),(21 22,23 24,25 26,21 22)))",
        wkb: concat!(
            "0107000000030000000101000000000000000000f03f0000000000000040010200000002",
            "000000000000000000f03f00000000000000400000000000000840000000000000104001",
            "030000000300000004000000000000000000f03f00000000000000400000000000000840",
            "000000000000104000000000000014400000000000001840000000000000f03f00000000",
            "0000004004000000000000000000264000000000000028400000000000002a4000000000",
            "00002c400000000000002e40000000000000304000000000000026400000000000002840",
            "040000000000000000003540000000000000364000000000000037400000000000003840",
            "00000000000039400000000000003a4000000000000035400000000000003640",
        ),
        wkb_xdr: concat!(
            "00000000070000000300000000013ff00000000000004000000000000000000000000200",
            "0000023ff000000000000040000000000000004008000000000000401000000000000000",
            "0000000300000003000000043ff000000000000040000000000000004008000000000000",
            "4010000000000000401400000000000040180000000000003ff000000000000040000000",
            "000000000000000440260000000000004028000000000000402a000000000000402c0000",
            "00000000402e000000000000403000000000000040260000000000004028000000000000",
            "000000044035000000000000403600000000000040370000000000004038000000000000",
            "4039000000000000403a00000000000040350000000000004036000000000000",
        ),
        ewkb: concat!(
            "0107000020e6100000030000000101000000000000000000f03f00000000000000400102",
            "00000002000000000000000000f03f000000000000004000000000000008400000000000",
            "00104001030000000300000004000000000000000000f03f000000000000004000000000",
            "00000840000000000000104000000000000014400000000000001840000000000000f03f",
            "000000000000004004000000000000000000264000000000000028400000000000002a40",
            "0000000000002c400000000000002e400000000000003040000000000000264000000000",
            "000028400400000000000000000035400000000000003640000000000000374000000000",
            "0000384000000000000039400000000000003a4000000000000035400000000000003640",
        ),
        ewkb_xdr: concat!(
            "0020000007000010e60000000300000000013ff000000000000040000000000000000000",
            "000002000000023ff0000000000000400000000000000040080000000000004010000000",
            "000000000000000300000003000000043ff0000000000000400000000000000040080000",
            "000000004010000000000000401400000000000040180000000000003ff0000000000000",
            "40000000000000000000000440260000000000004028000000000000402a000000000000",
            "402c000000000000402e0000000000004030000000000000402600000000000040280000",
            "000000000000000440350000000000004036000000000000403700000000000040380000",
            "000000004039000000000000403a00000000000040350000000000004036000000000000",
        ),
        twkb: Some(concat!(
            "a70003a100c09a0c80b518a20002c09a0c80b51880b51880b518a3000304c09a0c80b518",
            "80b51880b51880b51880b518ffe930ffe9300480897a80897a80b51880b51880b51880b5",
            "18ffe930ffe9300480897a80897a80b51880b51880b51880b518ffe930ffe930",
        )),
        geojson: r#"{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[1,2]},{"type":"LineString","coordinates":[[1,2],[3,4]]},{"type":"Polygon","coordinates":[[[1,2],[3,4],[5,6],[1,2]],[[11,12],[13,14],[15,16],[11,12]],[[21,22],[23,24],[25,26],[21,22]]]}]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "point_z",
        wkt: "POINT Z (1 2 3)",
        wkb: "01e9030000000000000000f03f00000000000000400000000000000840",
        wkb_xdr: "00000003e93ff000000000000040000000000000004008000000000000",
        ewkb: "01010000a0e6100000000000000000f03f00000000000000400000000000000840",
        ewkb_xdr: "00a0000001000010e63ff000000000000040000000000000004008000000000000",
        twkb: Some("a10801c09a0c80b51806"),
        geojson: r#"{"type":"Point","coordinates":[1,2,3]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "point_m",
        wkt: "POINT M (1 2 4)",
        wkb: "01d1070000000000000000f03f00000000000000400000000000001040",
        wkb_xdr: "00000007d13ff000000000000040000000000000004010000000000000",
        ewkb: "0101000060e6100000000000000000f03f00000000000000400000000000001040",
        ewkb_xdr: "0060000001000010e63ff000000000000040000000000000004010000000000000",
        twkb: Some("a10802c09a0c80b51808"),
        geojson: r#"{"type":"Point","coordinates":[1,2]}"#,
        wkb_reads_as: None,
        geojson_reads_as: Some("POINT(1 2)"),
    },
    Vector {
        name: "point_zm",
        wkt: "POINT ZM (1 2 3 4)",
        wkb: concat!(
            "01b90b0000000000000000f03f0000000000000040000000000000084000000000000010",
            "40",
        ),
        wkb_xdr: concat!(
            "0000000bb93ff00000000000004000000000000000400800000000000040100000000000",
            "00",
        ),
        ewkb: concat!(
            "01010000e0e6100000000000000000f03f00000000000000400000000000000840000000",
            "0000001040",
        ),
        ewkb_xdr: concat!(
            "00e0000001000010e63ff000000000000040000000000000004008000000000000401000",
            "0000000000",
        ),
        twkb: Some("a10803c09a0c80b5180608"),
        geojson: r#"{"type":"Point","coordinates":[1,2,3]}"#,
        wkb_reads_as: None,
        geojson_reads_as: Some("POINT Z (1 2 3)"),
    },
    Vector {
        name: "line_string_z",
        wkt: "LINESTRING Z (1 2 3,4 5 6)",
        wkb: concat!(
            "01ea03000002000000000000000000f03f00000000000000400000000000000840000000",
            "000000104000000000000014400000000000001840",
        ),
        wkb_xdr: concat!(
            "00000003ea000000023ff000000000000040000000000000004008000000000000401000",
            "000000000040140000000000004018000000000000",
        ),
        ewkb: concat!(
            "01020000a0e610000002000000000000000000f03f000000000000004000000000000008",
            "40000000000000104000000000000014400000000000001840",
        ),
        ewkb_xdr: concat!(
            "00a0000002000010e6000000023ff0000000000000400000000000000040080000000000",
            "00401000000000000040140000000000004018000000000000",
        ),
        twkb: Some("a2080102c09a0c80b51806c0cf24c0cf2406"),
        geojson: r#"{"type":"LineString","coordinates":[[1,2,3],[4,5,6]]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "empty_line_string_m",
        wkt: "LINESTRING M EMPTY",
        wkb: "01d207000000000000",
        wkb_xdr: "00000007d200000000",
        ewkb: "0102000060e610000000000000",
        ewkb_xdr: "0060000002000010e600000000",
        twkb: Some("a21802"),
        geojson: r#"{"type":"LineString","coordinates":[]}"#,
        wkb_reads_as: None,
        geojson_reads_as: Some("LINESTRING EMPTY"),
    },
    Vector {
        name: "multi_point_z",
        wkt: "MULTIPOINT Z (1 2 3,4 5 6)",
        wkb: concat!(
            "01ec0300000200000001e9030000000000000000f03f0000000000000040000000000000",
            "084001e9030000000000000000104000000000000014400000000000001840",
        ),
        wkb_xdr: concat!(
            "00000003ec0000000200000003e93ff00000000000004000000000000000400800000000",
            "000000000003e9401000000000000040140000000000004018000000000000",
        ),
        ewkb: concat!(
            "01040000a0e6100000020000000101000080000000000000f03f00000000000000400000",
            "0000000008400101000080000000000000104000000000000014400000000000001840",
        ),
        ewkb_xdr: concat!(
            "00a0000004000010e60000000200800000013ff000000000000040000000000000004008",
            "0000000000000080000001401000000000000040140000000000004018000000000000",
        ),
        twkb: Some("a4080102c09a0c80b51806c0cf24c0cf2406"),
        geojson: r#"{"type":"MultiPoint","coordinates":[[1,2,3],[4,5,6]]}"#,
        wkb_reads_as: None,
        geojson_reads_as: None,
    },
    Vector {
        name: "triangle",
        wkt: "TRIANGLE((0 0,1 0,0 1,0 0))",
        wkb: concat!(
            "0111000000010000000400000000000000000000000000000000000000000000000000f0",
            "3f00000000000000000000000000000000000000000000f03f0000000000000000000000",
            "0000000000",
        ),
        wkb_xdr: concat!(
            "00000000110000000100000004000000000000000000000000000000003ff00000000000",
            "00000000000000000000000000000000003ff00000000000000000000000000000000000",
            "0000000000",
        ),
        ewkb: concat!(
            "0111000020e6100000010000000400000000000000000000000000000000000000000000",
            "000000f03f00000000000000000000000000000000000000000000f03f00000000000000",
            "000000000000000000",
        ),
        ewkb_xdr: concat!(
            "0020000011000010e60000000100000004000000000000000000000000000000003ff000",
            "0000000000000000000000000000000000000000003ff000000000000000000000000000",
            "000000000000000000",
        ),
        twkb: None,
        geojson: r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[0,1],[0,0]]]}"#,
        wkb_reads_as: None,
        geojson_reads_as: Some("POLYGON((0 0,1 0,0 1,0 0))"),
    },
    Vector {
        name: "tin",
        wkt: "TIN(((0 0,1 0,0 1,0 0)),((1 0,1 1,0 1,1 0)))",
        wkb: concat!(
            "011000000002000000011100000001000000040000000000000000000000000000000000",
            "0000000000000000f03f00000000000000000000000000000000000000000000f03f0000",
            "000000000000000000000000000001110000000100000004000000000000000000f03f00",
            "00000000000000000000000000f03f000000000000f03f00000000000000000000000000",
            "00f03f000000000000f03f0000000000000000",
        ),
        wkb_xdr: concat!(
            "000000001000000002000000001100000001000000040000000000000000000000000000",
            "00003ff0000000000000000000000000000000000000000000003ff00000000000000000",
            "0000000000000000000000000000000000001100000001000000043ff000000000000000",
            "000000000000003ff00000000000003ff000000000000000000000000000003ff0000000",
            "0000003ff00000000000000000000000000000",
        ),
        ewkb: concat!(
            "0110000020e6100000020000000111000000010000000400000000000000000000000000",
            "000000000000000000000000f03f00000000000000000000000000000000000000000000",
            "f03f00000000000000000000000000000000011100000001000000040000000000000000",
            "00f03f0000000000000000000000000000f03f000000000000f03f000000000000000000",
            "0000000000f03f000000000000f03f0000000000000000",
        ),
        ewkb_xdr: concat!(
            "0020000010000010e6000000020000000011000000010000000400000000000000000000",
            "0000000000003ff0000000000000000000000000000000000000000000003ff000000000",
            "000000000000000000000000000000000000000000001100000001000000043ff0000000",
            "00000000000000000000003ff00000000000003ff000000000000000000000000000003f",
            "f00000000000003ff00000000000000000000000000000",
        ),
        twkb: None,
        geojson: r#"{"type":"MultiPolygon","coordinates":[[[[0,0],[1,0],[0,1],[0,0]]],[[[1,0],[1,1],[0,1],[1,0]]]]}"#,
        wkb_reads_as: None,
        geojson_reads_as: Some("MULTIPOLYGON(((0 0,1 0,0 1,0 0)),((1 0,1 1,0 1,1 0)))"),
    },
];

#[allow(dead_code)]
pub fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[allow(dead_code)]
pub fn unhex(text: &str) -> Vec<u8> {
    assert!(text.len() % 2 == 0, "odd-length hex: {text}");
    (0..text.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&text[i..i + 2], 16).expect("valid hex"))
        .collect()
}
