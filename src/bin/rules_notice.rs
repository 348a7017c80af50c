//! fireadmin-rules - print the manual steps for deploying updated
//! Firestore security rules.
//!
//! Takes no input; the notice is a fixed template.

use fireadmin::rules;

fn main() {
    print!("{}", rules::render_notice());
}
