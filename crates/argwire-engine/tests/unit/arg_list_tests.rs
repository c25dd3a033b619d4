//! Unit tests for argument list layout and resolution

use std::sync::Arc;

use argwire_domain::{BeanRef, CallableDescriptor, Error, TypeDescriptor, Value};
use argwire_engine::arg::{r1, r2};
use argwire_engine::{Arg, ArgList, ResolveOptions};

use crate::test_utils::{MemoryContext, option_descriptor, recording_function, strings};

const HERE: &str = "registry.rs:10";

fn list(descriptor: CallableDescriptor, args: Vec<Arg>) -> Result<ArgList, Error> {
    ArgList::new(Arc::new(descriptor), args, HERE)
}

fn resolve(list: &ArgList, ctx: &MemoryContext) -> Result<Vec<Value>, Error> {
    list.resolve(ctx, &ResolveOptions::default(), HERE)
}

fn names() -> MemoryContext {
    MemoryContext::new()
        .with_property("a", "alpha")
        .with_property("b", "beta")
        .with_property("c", "gamma")
}

#[test]
fn test_unindexed_arguments_resolve_in_declaration_order() {
    let ctx = names();
    let list = list(strings(3), vec!["${a}".into(), "${b}".into(), "${c}".into()]).unwrap();

    let values = resolve(&list, &ctx).unwrap();
    assert_eq!(
        values,
        vec![Value::from("alpha"), Value::from("beta"), Value::from("gamma")]
    );
    assert_eq!(ctx.lookups(), vec!["bind:${a}", "bind:${b}", "bind:${c}"]);
}

#[test]
fn test_indexed_arguments_match_reordered_unindexed() {
    let ctx = names();
    let indexed = list(strings(2), vec![r2("${a}"), r1("${b}")]).unwrap();
    let unindexed = list(strings(2), vec!["${b}".into(), "${a}".into()]).unwrap();

    assert_eq!(resolve(&indexed, &ctx).unwrap(), resolve(&unindexed, &ctx).unwrap());
    assert_eq!(
        resolve(&indexed, &ctx).unwrap(),
        vec![Value::from("beta"), Value::from("alpha")]
    );
}

#[test]
fn test_mixed_indexing_is_rejected() {
    let result = list(strings(2), vec![r1("${a}"), "${b}".into()]);
    assert!(matches!(result, Err(Error::MixedIndexing { .. })));

    let result = list(strings(2), vec!["${a}".into(), r2("${b}")]);
    assert!(matches!(result, Err(Error::MixedIndexing { .. })));
}

#[test]
fn test_index_out_of_range_is_rejected() {
    match list(strings(2), vec![Arg::index(0, "${a}")]) {
        Err(Error::IndexOutOfRange { index, fixed, location }) => {
            assert_eq!(index, 0);
            assert_eq!(fixed, 2);
            assert_eq!(location, HERE);
        }
        other => panic!("Expected IndexOutOfRange, got {other:?}"),
    }
    assert!(matches!(
        list(strings(2), vec![Arg::index(3, "${a}")]),
        Err(Error::IndexOutOfRange { index: 3, .. })
    ));
}

#[test]
fn test_index_cannot_address_the_variadic_parameter() {
    let descriptor = CallableDescriptor::builder()
        .param(TypeDescriptor::value("String"))
        .variadic(TypeDescriptor::value("i64"))
        .build();
    assert!(matches!(
        list(descriptor, vec![Arg::index(2, Arg::literal(1))]),
        Err(Error::IndexOutOfRange { index: 2, fixed: 1, .. })
    ));
}

#[test]
fn test_duplicate_index_is_rejected() {
    let result = list(strings(2), vec![r1("${a}"), r1("${b}")]);
    assert!(matches!(result, Err(Error::DuplicateIndex { index: 1, .. })));
}

#[test]
fn test_index_cannot_wrap_index_or_option() {
    let nested = list(strings(2), vec![Arg::index(1, r2("${a}"))]);
    assert!(matches!(nested, Err(Error::InvalidIndexedArgument { .. })));

    let (function, _) = recording_function(option_descriptor(), vec![Value::from("x")]);
    let option = Arg::option(function, vec![]).unwrap();
    let wrapped = list(strings(2), vec![Arg::index(1, option)]);
    assert!(matches!(wrapped, Err(Error::InvalidIndexedArgument { .. })));
}

#[test]
fn test_excess_arguments_need_a_variadic_parameter() {
    match list(strings(1), vec!["${a}".into(), "${b}".into()]) {
        Err(error @ Error::TooManyArguments { .. }) => {
            assert!(error.is_structural());
            assert!(error.to_string().contains(HERE));
        }
        other => panic!("Expected TooManyArguments, got {other:?}"),
    }

    let no_params = list(strings(0), vec![Arg::literal(1)]);
    assert!(matches!(
        no_params,
        Err(Error::TooManyArguments { given: 1, fixed: 0, .. })
    ));
}

#[test]
fn test_variadic_collects_any_number_of_trailing_arguments() {
    let descriptor = || {
        CallableDescriptor::builder()
            .param(TypeDescriptor::value("String"))
            .param(TypeDescriptor::value("String"))
            .variadic(TypeDescriptor::value("i64"))
            .build()
    };
    let ctx = names();

    for extra in 0..4_i64 {
        let mut args: Vec<Arg> = vec!["${a}".into(), "${b}".into()];
        args.extend((0..extra).map(Arg::literal));
        let list = list(descriptor(), args).unwrap();
        assert_eq!(list.variadic_count(), extra as usize);

        let values = resolve(&list, &ctx).unwrap();
        assert_eq!(values.len(), 3);
        let expected: Vec<Value> = (0..extra).map(Value::from).collect();
        assert_eq!(values[2], Value::List(expected));
    }
}

#[test]
fn test_variadic_arguments_are_resolved_with_the_element_type() {
    let descriptor = CallableDescriptor::builder()
        .variadic(TypeDescriptor::value("String"))
        .build();
    let ctx = names();
    let list = list(descriptor, vec!["${c}".into(), "${a}".into()]).unwrap();

    assert_eq!(
        resolve(&list, &ctx).unwrap(),
        vec![Value::List(vec![Value::from("gamma"), Value::from("alpha")])]
    );
}

#[test]
fn test_unfilled_slots_resolve_by_type() {
    let descriptor = CallableDescriptor::builder()
        .param(TypeDescriptor::value("Settings"))
        .param(TypeDescriptor::bean_of::<String>())
        .build();
    let ctx = MemoryContext::new()
        .with_property("", "whole document")
        .with_object(BeanRef::new("db", String::from("postgres")));

    let list = list(descriptor, vec![]).unwrap();
    let values = resolve(&list, &ctx).unwrap();

    assert_eq!(values[0], Value::from("whole document"));
    assert_eq!(
        values[1].as_object().map(|bean| bean.id().to_string()),
        Some("db".to_string())
    );
    assert_eq!(ctx.lookups(), vec!["bind:${}", "autowire:"]);
}

#[test]
fn test_default_value_tag_is_configurable() {
    let ctx = MemoryContext::new().with_property("root", 1);
    let list = list(strings(1), vec![]).unwrap();
    let options = ResolveOptions {
        default_value_tag: "${root}".to_string(),
        trace_arguments: false,
    };

    assert_eq!(list.resolve(&ctx, &options, HERE).unwrap(), vec![Value::from(1)]);
    assert_eq!(ctx.lookups(), vec!["bind:${root}"]);
}

#[test]
fn test_object_tags() {
    let descriptor = CallableDescriptor::builder()
        .param(TypeDescriptor::bean("Db"))
        .param(TypeDescriptor::bean("Db"))
        .param(TypeDescriptor::bean("Db"))
        .build();
    let primary = BeanRef::new("primary", 1_u32);
    let ctx = MemoryContext::new().with_object(primary.clone());

    let list = list(
        descriptor,
        vec![
            "primary".into(),
            Arg::definition("primary"),
            Arg::type_of::<u32>(),
        ],
    )
    .unwrap();
    let values = resolve(&list, &ctx).unwrap();

    assert!(values.iter().all(|value| *value == Value::Object(primary.clone())));
    assert_eq!(
        ctx.lookups(),
        vec![
            "autowire:primary".to_string(),
            "autowire:primary".to_string(),
            format!("autowire:{}:", std::any::type_name::<u32>()),
        ]
    );
}

#[test]
fn test_literals_bypass_the_container() {
    let descriptor = CallableDescriptor::builder()
        .param(TypeDescriptor::value("String"))
        .param(TypeDescriptor::bean("Db"))
        .build();
    let ctx = MemoryContext::new();
    let db = BeanRef::new("db", 0_u8);

    let list = list(descriptor, vec![Arg::literal("hi"), Arg::literal(db.clone())]).unwrap();
    let values = resolve(&list, &ctx).unwrap();

    assert_eq!(values, vec![Value::from("hi"), Value::Object(db)]);
    assert!(ctx.lookups().is_empty());
}

#[test]
fn test_resolution_stops_at_first_failure() {
    let ctx = names();
    let list = list(strings(3), vec!["${a}".into(), "${missing}".into(), "${c}".into()]).unwrap();

    match resolve(&list, &ctx) {
        Err(Error::Resolution {
            argument,
            location,
            source,
        }) => {
            assert_eq!(argument, "\"${missing}\"");
            assert_eq!(location, HERE);
            assert!(matches!(*source, Error::Binding { .. }));
        }
        other => panic!("Expected Resolution error, got {other:?}"),
    }
    assert_eq!(ctx.lookups(), vec!["bind:${a}", "bind:${missing}"]);
}

#[test]
fn test_each_resolution_reads_fresh_state() {
    let list = list(strings(1), vec!["${a}".into()]).unwrap();
    assert_eq!(resolve(&list, &names()).unwrap(), vec![Value::from("alpha")]);

    let changed = MemoryContext::new().with_property("a", "changed");
    assert_eq!(resolve(&list, &changed).unwrap(), vec![Value::from("changed")]);
}
