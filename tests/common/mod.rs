#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const NAVIGATION: &str = r#"export default function Navigation() {
  return (
    <nav className="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
      <div className="hidden md:flex space-x-8">Links</div>
      <button className="md:hidden p-2">Menu</button>
    </nav>
  );
}
"#;

pub const PROFILE: &str = r#"export default function Profile() {
  return (
    <section className="py-12 md:py-20">
      <img className="w-32 md:w-48 rounded-full" />
      <h1 className="text-3xl md:text-5xl font-bold">Name</h1>
    </section>
  );
}
"#;

pub const WORK: &str = r#"export default function WorkExperience() {
  return (
    <div className="grid grid-cols-1 md:grid-cols-2 gap-6">Jobs</div>
  );
}
"#;

pub const EDUCATION: &str = r#"export default function Education() {
  return (
    <div className="grid grid-cols-1 lg:grid-cols-3 gap-4">Schools</div>
  );
}
"#;

pub const CONTACT: &str = r#"export default function Contact() {
  return (
    <footer className="flex flex-col sm:flex-row">Contact &mdash; me</footer>
  );
}
"#;

/// Contact section with no breakpoint classes at all.
pub const PLAIN_CONTACT: &str = r#"export default function Contact() {
  return <footer className="flex flex-col p-4">Contact &mdash; me</footer>;
}
"#;

pub fn component_paths() -> Vec<PathBuf> {
    [
        "src/components/Navigation.jsx",
        "src/components/Profile.jsx",
        "src/components/WorkExperience.jsx",
        "src/components/Education.jsx",
        "src/components/Contact.jsx",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A project root holding all five default components.
pub fn portfolio() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    write(d.path(), "src/components/Navigation.jsx", NAVIGATION);
    write(d.path(), "src/components/Profile.jsx", PROFILE);
    write(d.path(), "src/components/WorkExperience.jsx", WORK);
    write(d.path(), "src/components/Education.jsx", EDUCATION);
    write(d.path(), "src/components/Contact.jsx", CONTACT);
    d
}
