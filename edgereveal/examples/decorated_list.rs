// Example: headers, footers and an empty-state slot around a plain Vec adapter.
use std::rc::Rc;

use edgereveal::{ListAdapter, ListChange, ListDecorator};

struct Names(Vec<&'static str>);

impl ListAdapter for Names {
    type Kind = ();
    type Holder = String;

    fn item_count(&self) -> usize {
        self.0.len()
    }

    fn view_kind_at(&self, index: usize) -> Option<()> {
        (index < self.0.len()).then_some(())
    }

    fn create_view(&mut self, _kind: &()) -> Option<String> {
        Some(String::new())
    }

    fn bind_view(&mut self, holder: &mut String, index: usize) {
        *holder = self.0[index].to_string();
    }
}

#[derive(Debug)]
struct Banner(&'static str);

fn dump(d: &ListDecorator<Names, Banner>) {
    for p in 0..d.item_count() {
        match d.slot_widget_at(p) {
            Some(w) => println!("  {p}: [{}]", w.0),
            None => println!("  {p}: {:?}", d.view_kind_at(p)),
        }
    }
}

fn main() {
    let mut d = ListDecorator::with_adapter(Names(Vec::new()));
    d.set_on_change(Some(|c: &ListChange| println!("host <- {c:?}")));
    d.add_header(Rc::new(Banner("title")));
    d.add_footer(Rc::new(Banner("end of list")));
    d.set_empty_state_view(Rc::new(Banner("nothing here")));

    println!("empty list:");
    dump(&d);

    d.update_adapter(|names| {
        names.0.extend(["ada", "grace", "linus"]);
        ListChange::inserted(0, 3)
    });
    println!("after insert:");
    dump(&d);

    d.update_adapter(|names| {
        names.0[1] = "barbara";
        ListChange::changed(1, 1)
    });
}
