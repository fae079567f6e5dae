use std::cell::RefCell;

use super::*;

#[test]
fn go_to_forwards_path_with_default_options() {
    let seen = RefCell::new(Vec::new());
    let navigator = RouterNavigator(|path: &str, options: NavigateOptions| {
        seen.borrow_mut().push((path.to_owned(), options.replace));
    });

    navigator.go_to("/");

    assert_eq!(*seen.borrow(), vec![("/".to_owned(), false)]);
}
