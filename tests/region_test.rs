use rs_pageflat::{dom, selector, Error, Options};

#[test]
fn region_resolves_to_nested_form() {
    let doc = dom::parse(
        r#"<main id="main-content"><div><div>
             <p>intro</p>
             <form action="/answer"><p>question</p></form>
           </div></div></main>"#,
    );

    match selector::content_region(&doc, &Options::default()) {
        Ok(region) => assert_eq!(dom::tag_name(&region), Some("form".to_string())),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn region_resolves_to_container_without_form() {
    let doc = dom::parse(
        r#"<main id="main-content"><div><div>
             <h1>Confirmation</h1><p>Done.</p>
           </div></div></main>"#,
    );

    match selector::content_region(&doc, &Options::default()) {
        Ok(region) => assert_eq!(dom::tag_name(&region), Some("div".to_string())),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn form_deep_inside_container_is_still_found() {
    let doc = dom::parse(
        r#"<main id="main-content"><div><div>
             <section><div><form><p>deep</p></form></div></section>
           </div></div></main>"#,
    );

    match selector::content_region(&doc, &Options::default()) {
        Ok(region) => assert_eq!(dom::tag_name(&region), Some("form".to_string())),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn wrong_main_id_means_no_container() {
    let doc = dom::parse(
        r#"<main id="content"><div><div><p>text</p></div></div></main>"#,
    );

    let result = selector::content_region(&doc, &Options::default());
    assert!(matches!(result, Err(Error::ContainerNotFound(_))));
}

#[test]
fn container_error_names_the_selector_path() {
    let doc = dom::parse("<html><body></body></html>");

    match selector::content_region(&doc, &Options::default()) {
        Ok(_) => panic!("expected Err(ContainerNotFound)"),
        Err(err) => assert!(err.to_string().contains("main#main-content > div > div")),
    }
}
