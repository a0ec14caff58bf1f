use hashbrown::HashMap;

lazy_static! {
    /// The fixed set of supported unary functions, keyed by name.
    ///
    /// `log` is the natural logarithm. The registry is closed: an identifier
    /// outside this set is always a variable name.
    pub static ref FUNCTIONS: HashMap<String, fn(f64) -> f64> = {
        let mut map = HashMap::<String, fn(f64) -> f64>::new();
        map.insert("sin".into(), libm::sin);
        map.insert("cos".into(), libm::cos);
        map.insert("tan".into(), libm::tan);
        map.insert("sqrt".into(), libm::sqrt);
        map.insert("log".into(), libm::log);
        map.shrink_to_fit();
        map
    };
}

#[must_use]
/// Check if `name` is one of the supported function names.
///
/// # Examples
///
/// ```
/// # use shunt::is_function;
/// assert_eq!(is_function("sqrt"), true);
/// assert_eq!(is_function("x"), false);
/// ```
pub fn is_function(name: &str) -> bool {
    return FUNCTIONS.contains_key(name);
}
