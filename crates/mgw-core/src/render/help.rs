const HELP: &str = "\
Guided commands (run without arguments to be asked for each value):
  1 | additem     -n/--name NAME -p/--price PRICE
  2 | deleteitem  -i/--index INDEX
  3 | listitem
  4 | updateitem  -i/--index INDEX [-n/--name NAME] [-p/--price PRICE]
  5 | finditem    TEXT
  6 | addorder    -i/--item INDEX|NAME [-q/--quantity QTY] ...
  7 | listorder
  ? | help
      exit

Power-user commands (flags only):
  /additem      -n/--name NAME -p/--price PRICE
  /deleteitem   -i/--index INDEX
  /listitem
  /updateitem   -i/--index INDEX [-n/--name NAME] [-p/--price PRICE]
  /finditem     TEXT
  /addorder     -i/--item INDEX|NAME [-q/--quantity QTY] ...
  /listorder
  /refundorder  -i/--id ORDER_NUMBER|ORDER_ID
  /help
  /exit

Prices need exactly two decimal places, e.g. 5.10. Quote values that
contain spaces or start with a dash, e.g. -n \"Milk Tea\".
";

pub fn render_help() -> String {
    HELP.to_string()
}
