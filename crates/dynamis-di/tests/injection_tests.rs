//! Integration tests for dependency lookup and injection

use dynamis_di::{DependencyLibrary, DiError};

#[derive(Debug, PartialEq)]
struct Config {
	retries: u32,
}

struct Greeter {
	prefix: &'static str,
}

fn greet(greeter: &Greeter, message: &String) -> String {
	format!("{} {}", greeter.prefix, message)
}

#[test]
fn injects_registered_message() {
	fn echo(message: &String) -> String {
		message.clone()
	}

	let mut library = DependencyLibrary::new();
	library.add("Hello".to_string()).unwrap();

	assert_eq!(library.inject(echo).unwrap(), "Hello");
}

#[test]
fn injects_multiple_parameters() {
	let mut library = DependencyLibrary::new();
	library.add(Greeter { prefix: ">>" }).unwrap();
	library.add("Hello".to_string()).unwrap();

	assert_eq!(library.inject(greet).unwrap(), ">> Hello");
}

#[test]
fn zero_parameter_callables_just_run() {
	let library = DependencyLibrary::new();
	assert_eq!(library.inject(|| 41 + 1).unwrap(), 42);
}

#[test]
fn missing_required_parameter_fails_before_the_call() {
	let mut called = false;
	let library = DependencyLibrary::new();
	let result = library.inject(|_config: &Config| {
		called = true;
	});

	assert!(matches!(result, Err(DiError::NotFound { .. })));
	assert!(!called);
}

#[test]
fn optional_parameters_resolve_to_none_when_unregistered() {
	let library = DependencyLibrary::new();
	let retries = library
		.inject(|config: Option<&Config>| config.map_or(1, |c| c.retries))
		.unwrap();
	assert_eq!(retries, 1);
}

#[test]
fn optional_parameters_resolve_when_registered() {
	let mut library = DependencyLibrary::new();
	library.add(Config { retries: 5 }).unwrap();

	let retries = library
		.inject(|config: Option<&Config>| config.map_or(1, |c| c.retries))
		.unwrap();
	assert_eq!(retries, 5);
}

#[test]
fn caller_supplied_arguments_are_captures() {
	let mut library = DependencyLibrary::new();
	library.add(Greeter { prefix: ">>" }).unwrap();

	let name = "dynamis";
	let line = library
		.inject(|greeter: &Greeter| format!("{} {name}", greeter.prefix))
		.unwrap();
	assert_eq!(line, ">> dynamis");
}

#[test]
fn exact_type_keying_distinguishes_wrappers() {
	#[derive(Debug, PartialEq)]
	struct Wrapped(String);

	let mut library = DependencyLibrary::new();
	library.add(Wrapped("a".to_string())).unwrap();

	assert!(library.contains_type::<Wrapped>());
	assert!(!library.contains_type::<String>());
}
