use ros2gen::parser::parse_message_string;
use ros2gen::{Blacklist, Config, ErrorCodeExtractor};

#[test]
fn codegen_fragments_cover_every_field_kind() {
    let config = Config::default();
    let msg = parse_message_string(
        &config,
        "test_msgs",
        "Mixed",
        "\
int32 plain
string name
wstring wide
int32[4] fixed
uint8[] bytes
Inner nested
Inner[] nested_list
geometry_msgs/Point[2] pair
time stamp
",
    )
    .unwrap();

    let frag = |name: &str| msg.get_field(name).unwrap().codegen.clone();

    assert_eq!(frag("plain").to_native, "mem.plain = m.plain");
    assert_eq!(frag("plain").clone, "c.plain = t.plain");

    assert_eq!(
        frag("name").to_native,
        "primitives::string_to_native(&mut mem.name, &m.name)"
    );
    assert_eq!(
        frag("wide").from_native,
        "primitives::u16string_to_owned(&mut m.wide, &mem.wide)"
    );
    assert_eq!(frag("wide").clone, "c.wide = t.wide.clone()");

    assert_eq!(
        frag("fixed").to_native,
        "primitives::Int32::array_to_native(&mut mem.fixed, &m.fixed)"
    );
    assert_eq!(frag("fixed").default_assignment, "t.fixed = [0; 4]");

    assert_eq!(
        frag("bytes").from_native,
        "primitives::Uint8::sequence_to_owned(&mut m.bytes, &mem.bytes)"
    );
    assert_eq!(frag("bytes").default_assignment, "t.bytes = Vec::new()");

    assert_eq!(frag("nested").to_native, "Inner::to_native(&mut mem.nested, &m.nested)");
    assert_eq!(frag("nested").default_assignment, "t.nested.set_defaults()");

    assert_eq!(
        frag("nested_list").clone,
        "c.nested_list = t.nested_list.iter().map(Inner::clone).collect()"
    );

    assert_eq!(
        frag("pair").to_native,
        "geometry_msgs_msg::Point::array_to_native(&mut mem.pair, &m.pair)"
    );
    assert_eq!(frag("pair").clone, "c.pair.clone_from(&t.pair)");
    assert_eq!(
        frag("pair").default_assignment,
        "for v in &mut t.pair {\n    v.set_defaults();\n}"
    );

    assert_eq!(frag("stamp").to_native, "mem.stamp = m.stamp");
    assert_eq!(
        msg.imports.get("time").map(String::as_str),
        Some("ros2gen_runtime::time")
    );
}

#[test]
fn blacklist_reports_the_matching_rule() {
    let config = Config {
        blacklist: vec![
            "private_msgs/.*".to_string(),
            ".*/msg/Internal.*".to_string(),
        ],
        ..Config::default()
    };
    let bl = Blacklist::from_config(&config).unwrap();

    let (hit, rule) = bl.is_blacklisted("private_msgs/msg/Anything");
    assert!(hit);
    assert_eq!(rule, "private_msgs/.*");

    let (hit, rule) = bl.is_blacklisted("other_msgs/msg/InternalState");
    assert!(hit);
    assert_eq!(rule, ".*/msg/Internal.*");

    let (hit, rule) = bl.is_blacklisted("std_msgs/msg/Header");
    assert!(!hit);
    assert!(rule.is_empty());
}

#[test]
fn default_blacklist_covers_the_statistics_dummy() {
    let bl = Blacklist::from_config(&Config::default()).unwrap();
    let (hit, rule) = bl.is_blacklisted("libstatistics_collector/msg/DummyMessage");
    assert!(hit);
    assert_eq!(rule, "libstatistics_collector/msg/DummyMessage");
}

const RCL_TYPES_EXCERPT: &str = "\
// Success return code.
#define RCL_RET_OK 0
// Unspecified error return code.
#define RCL_RET_ERROR 1
/// Timeout occurred.
#define RCL_RET_TIMEOUT 2

#define RCL_RET_NOT_INIT 101  // rcl_init() not yet called.
";

const RMW_RET_TYPES_EXCERPT: &str = "\
#define RMW_RET_OK 0
#define RMW_RET_ERROR 1
#define RMW_RET_TIMEOUT RCL_RET_TIMEOUT
";

#[test]
fn error_code_extraction_and_dedup() {
    let config = Config::default();
    let mut extractor = ErrorCodeExtractor::new(&config.error_code_headers).unwrap();
    assert!(extractor.matches_file("/opt/ros/jazzy/include/rcl/types.h"));
    assert!(extractor.matches_file("include/rcl_action/types.h"));
    assert!(!extractor.matches_file("include/rcl/node_options.h"));

    let rcl = extractor.extract(RCL_TYPES_EXCERPT);
    assert_eq!(rcl.len(), 4);
    assert_eq!(rcl[0].name, "RCL_RET_OK");
    assert_eq!(rcl[0].comment, "Success return code.");
    assert_eq!(rcl[3].name, "RCL_RET_NOT_INIT");
    assert_eq!(rcl[3].value, "101");
    assert_eq!(rcl[3].comment, "rcl_init() not yet called.");

    let rmw = extractor.extract(RMW_RET_TYPES_EXCERPT);
    assert_eq!(rmw.len(), 3);

    // Integer duplicates across headers are filtered, symbolic aliases kept.
    assert!(extractor.is_aliased("RMW_RET_OK"));
    assert!(extractor.is_aliased("RMW_RET_ERROR"));
    assert!(!extractor.is_aliased("RMW_RET_TIMEOUT"));
    assert_eq!(rmw[2].reference, "RCL_RET_TIMEOUT");
}

#[test]
fn return_code_names_translate_cleanly() {
    use ros2gen::names::return_code_type_name;

    assert_eq!(return_code_type_name("RCL_RET_OK"), "Ok");
    assert_eq!(return_code_type_name("RCL_RET_NOT_INIT"), "NotInit");
    assert_eq!(return_code_type_name("RMW_RET_OK"), "RmwOk");
}
